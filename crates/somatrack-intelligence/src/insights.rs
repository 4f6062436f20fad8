// ABOUTME: Motivational guidance text for AAHPERD percentile buckets
// ABOUTME: Seven static message/advice/severity triples, one per percentile bucket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

use crate::bands::{Percentile, Severity};
use serde::Serialize;

/// User-facing interpretation of a percentile bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MotivationalMessage {
    /// What the percentile means
    pub message: &'static str,
    /// Suggested next step
    pub advice: &'static str,
    /// Presentation tag
    pub severity: Severity,
}

const fn entry(message: &'static str, advice: &'static str, severity: Severity) -> MotivationalMessage {
    MotivationalMessage {
        message,
        advice,
        severity,
    }
}

const MESSAGES: [MotivationalMessage; 7] = [
    entry(
        "Excellent! You are in the top 5% of the university population. Your body composition is exceptional.",
        "Keep your current exercise routine and balanced diet.",
        Severity::Success,
    ),
    entry(
        "Very good! You are in the top 10% of the university population. Your body composition is very good.",
        "Continue your healthy lifestyle and consider adding strength training.",
        Severity::Info,
    ),
    entry(
        "Good! You are above the average of the university population. Your body composition is good.",
        "Keep exercising regularly and consider optimizing your diet.",
        Severity::Primary,
    ),
    entry(
        "You are at the average of the university population. There is room to improve your body composition.",
        "Add regular cardiovascular exercise and review your eating habits.",
        Severity::Warning,
    ),
    entry(
        "You are below the average of the university population. It is time to take action.",
        "Start a structured exercise program and consult a nutritionist.",
        Severity::Warning,
    ),
    entry(
        "Your body composition is significantly below the average. It is important to act now.",
        "Seek professional advice for a personalized exercise and nutrition plan.",
        Severity::Danger,
    ),
    entry(
        "Your body composition is far below the average. It is crucial to seek professional help.",
        "Consult a physician, a nutritionist and a certified personal trainer immediately.",
        Severity::Danger,
    ),
];

/// Static guidance for an AAHPERD percentile bucket
#[must_use]
pub const fn motivational_message(percentile: Percentile) -> MotivationalMessage {
    MESSAGES[percentile as usize]
}
