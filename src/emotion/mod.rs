// ABOUTME: Emotion analysis capability with bucketed mood vocabulary
// ABOUTME: Injected analyzer trait plus a deterministic keyword-based default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

//! Emotion analysis for the meal recommender.
//!
//! The hosted transformer pipelines of the production deployment are
//! collaborators: the engine only needs "given text, return an emotion
//! label", which it buckets into three coarse mood signals. The analyzer is
//! an injected capability, never a process-wide global, so the RL core and
//! its tests never depend on network calls. [`KeywordEmotionAnalyzer`] is the
//! deterministic offline default.

use serde::{Deserialize, Serialize};

/// Coarse 3-way mood signal used in the recommender state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionBucket {
    /// Positive mood (index 0)
    Positive,
    /// Neutral or unrecognized mood (index 1)
    Neutral,
    /// Negative mood (index 2)
    Negative,
}

impl EmotionBucket {
    /// Position of this bucket in the recommender state space
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Positive => 0,
            Self::Neutral => 1,
            Self::Negative => 2,
        }
    }
}

/// Emotion vocabulary produced by analyzers.
///
/// English-capable classifiers return the richer labels; coarse sentiment
/// backends return `Positive`/`Neutral`/`Negative` directly. Either way the
/// engine only consumes the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLabel {
    /// Coarse positive sentiment
    Positive,
    /// Joy
    Joy,
    /// Love
    Love,
    /// Surprise
    Surprise,
    /// Neutral sentiment
    Neutral,
    /// Coarse negative sentiment
    Negative,
    /// Sadness
    Sadness,
    /// Anger
    Anger,
    /// Fear
    Fear,
}

impl EmotionLabel {
    /// Map the label onto the 3-bucket mood signal
    #[must_use]
    pub fn bucket(self) -> EmotionBucket {
        match self {
            Self::Positive | Self::Joy | Self::Love | Self::Surprise => EmotionBucket::Positive,
            Self::Neutral => EmotionBucket::Neutral,
            Self::Negative | Self::Sadness | Self::Anger | Self::Fear => EmotionBucket::Negative,
        }
    }
}

/// Capability handle for emotion classification.
///
/// Implementations must be deterministic for a given input or document that
/// they are not; the training environment calls this once per simulated meal.
pub trait EmotionAnalyzer {
    /// Classify a short text sample into an emotion label
    fn analyze(&self, text: &str) -> EmotionLabel;
}

impl<T: EmotionAnalyzer + ?Sized> EmotionAnalyzer for &T {
    fn analyze(&self, text: &str) -> EmotionLabel {
        (**self).analyze(text)
    }
}

/// Deterministic lexicon-based analyzer used when no hosted pipeline is
/// configured.
///
/// Scans the lowercased text for emotion keywords; first family match wins,
/// unmatched text is neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordEmotionAnalyzer;

const SADNESS_WORDS: &[&str] = &["sad", "unhappy", "miserable", "down", "depressed", "lonely"];
const ANGER_WORDS: &[&str] = &["angry", "furious", "annoyed", "frustrated", "mad"];
const FEAR_WORDS: &[&str] = &["afraid", "scared", "anxious", "worried", "nervous"];
const NEGATIVE_WORDS: &[&str] = &["terrible", "awful", "tired", "stressed", "bad"];
const JOY_WORDS: &[&str] = &["great", "happy", "joy", "excited", "amazing", "wonderful"];
const LOVE_WORDS: &[&str] = &["love", "adore"];
const POSITIVE_WORDS: &[&str] = &["good", "fine", "motivated", "strong", "energized"];

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

impl EmotionAnalyzer for KeywordEmotionAnalyzer {
    fn analyze(&self, text: &str) -> EmotionLabel {
        let text = text.to_lowercase();
        if contains_any(&text, SADNESS_WORDS) {
            EmotionLabel::Sadness
        } else if contains_any(&text, ANGER_WORDS) {
            EmotionLabel::Anger
        } else if contains_any(&text, FEAR_WORDS) {
            EmotionLabel::Fear
        } else if contains_any(&text, NEGATIVE_WORDS) {
            EmotionLabel::Negative
        } else if contains_any(&text, JOY_WORDS) {
            EmotionLabel::Joy
        } else if contains_any(&text, LOVE_WORDS) {
            EmotionLabel::Love
        } else if contains_any(&text, POSITIVE_WORDS) {
            EmotionLabel::Positive
        } else {
            EmotionLabel::Neutral
        }
    }
}
