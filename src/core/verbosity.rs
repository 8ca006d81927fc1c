//! Verbosity gating
//!
//! A statement flagged as verbose is emitted only when verbose output is
//! enabled and its verbosity does not exceed the threshold. Markers in the
//! bypass set override both checks.

use serde::{Deserialize, Serialize};

/// Default threshold for verbose statements
pub const DEFAULT_VERBOSITY_THRESHOLD: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbosityState {
    enabled: bool,
    threshold: u32,
    /// Insertion-ordered, no duplicates
    bypass_markers: Vec<String>,
}

impl VerbosityState {
    pub fn new(enabled: bool, threshold: u32) -> Self {
        Self {
            enabled,
            threshold,
            bypass_markers: Vec::new(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: u32) {
        self.threshold = threshold;
    }

    /// Add a bypass marker. Returns `false` if it was already present.
    pub fn add_bypass_marker(&mut self, marker: impl Into<String>) -> bool {
        let marker = marker.into();
        if self.is_bypassed(&marker) {
            return false;
        }
        self.bypass_markers.push(marker);
        true
    }

    /// Remove a bypass marker. Returns `false` if it was not present.
    pub fn remove_bypass_marker(&mut self, marker: &str) -> bool {
        let before = self.bypass_markers.len();
        self.bypass_markers.retain(|m| m != marker);
        self.bypass_markers.len() != before
    }

    pub fn is_bypassed(&self, marker: &str) -> bool {
        self.bypass_markers.iter().any(|m| m == marker)
    }

    pub fn bypass_markers(&self) -> &[String] {
        &self.bypass_markers
    }

    /// Decide whether a statement may be emitted
    ///
    /// While verbose output is disabled, a verbose statement is suppressed
    /// unless its context marker is a bypass marker, whatever its verbosity.
    /// With output enabled the threshold check is inclusive and only applies
    /// when a verbosity was supplied. Statements that are not verbose always
    /// pass.
    ///
    /// ```
    /// use lifecycle_logging::core::VerbosityState;
    ///
    /// let mut state = VerbosityState::new(true, 2);
    /// assert!(state.permits(true, Some(2), None));
    /// assert!(!state.permits(true, Some(3), None));
    ///
    /// state.add_bypass_marker("net");
    /// assert!(state.permits(true, Some(3), Some("net")));
    ///
    /// let disabled = VerbosityState::new(false, 1);
    /// assert!(!disabled.permits(true, Some(0), None));
    /// ```
    pub fn permits(&self, verbose: bool, verbosity: Option<u32>, context_marker: Option<&str>) -> bool {
        if !verbose {
            return true;
        }

        if context_marker.is_some_and(|marker| self.is_bypassed(marker)) {
            return true;
        }

        if !self.enabled {
            return false;
        }

        match verbosity {
            Some(level) => level <= self.threshold,
            None => true,
        }
    }
}

impl Default for VerbosityState {
    fn default() -> Self {
        Self::new(false, DEFAULT_VERBOSITY_THRESHOLD)
    }
}
