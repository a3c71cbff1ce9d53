//! Scripted test scenarios for automated UI runs
//!
//! A scenario is a TOML file of timed actions (navigate, click record,
//! select model, ...) with optional assertions checked against live app
//! state. Launched via `deepguard --test-config <file>`; the process exit
//! code reflects whether every assertion passed.

mod runner;

pub use runner::{AssertionContext, AssertionResult, TestCommand, TestRunner};

use crate::error::{GuardError, Result};
use crate::state::{RecordingMode, Screen};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// A test scenario loaded from a TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct TestConfig {
    /// Scenario metadata
    pub test: TestMetadata,
    /// Timed actions, ordered by time
    pub actions: Vec<TestAction>,
}

/// Metadata about the scenario
#[derive(Debug, Clone, Deserialize)]
pub struct TestMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A single action with its firing time
#[derive(Debug, Clone, Deserialize)]
pub struct TestAction {
    /// Milliseconds after scenario start
    pub time_ms: u64,
    pub action: ActionType,
    /// Optional assertion validated right after the action
    #[serde(default)]
    pub assert: Option<Assertion>,
}

/// Actions a scenario can perform
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionType {
    /// Navigate to a screen
    Navigate { screen: Screen },
    /// Switch the Home capture-mode toggle
    SetMode { mode: RecordingMode },
    /// Click the record button (toggles recording)
    ClickRecord,
    /// Stop recording (and route to results)
    StopRecord,
    /// Cancel recording without results
    CancelRecord,
    /// Select a detection model
    SelectModel { id: String },
    /// Flip the theme
    ToggleTheme,
    /// Log a message for debugging
    Log { message: String },
    /// Exit the application
    Exit {
        #[serde(default)]
        code: i32,
    },
}

/// Assertions over live application state
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Assertion {
    /// A recording session is active
    IsRecording,
    /// No recording session is active
    IsIdle,
    /// The given screen is current
    CurrentScreen { screen: Screen },
    /// The active session has run for at least this many seconds
    ElapsedSecondsMin { min_seconds: u32 },
    /// The given model id is selected
    SelectedModel { id: String },
    /// The displayed confidence has reached at least this value
    ConfidenceAtLeast { value: u8 },
    /// The confidence count-up has reached its target
    ConfidenceComplete,
}

impl TestConfig {
    /// Load a scenario from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| GuardError::TestConfig {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content).map_err(|e| match e {
            GuardError::TestConfig { message, .. } => GuardError::TestConfig {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Parse a scenario from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: TestConfig = toml::from_str(content).map_err(|e| GuardError::TestConfig {
            path: String::new(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let invalid = |message: String| GuardError::TestConfig {
            path: String::new(),
            message,
        };

        if self.actions.is_empty() {
            return Err(invalid("scenario must have at least one action".to_string()));
        }

        let mut last_time = 0;
        for action in &self.actions {
            if action.time_ms < last_time {
                return Err(invalid(format!(
                    "actions must be ordered by time; found {}ms after {}ms",
                    action.time_ms, last_time
                )));
            }
            last_time = action.time_ms;
        }

        let has_exit = self
            .actions
            .iter()
            .any(|a| matches!(a.action, ActionType::Exit { .. }));
        if !has_exit {
            return Err(invalid("scenario must end with an exit action".to_string()));
        }

        Ok(())
    }
}

impl TestAction {
    /// Delay from scenario start to this action
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.time_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recording_scenario() {
        let config = TestConfig::parse(
            r#"
            [test]
            name = "Audio recording round trip"

            [[actions]]
            time_ms = 100
            action = { type = "click_record" }
            assert = { type = "is_recording" }

            [[actions]]
            time_ms = 3200
            action = { type = "stop_record" }
            assert = { type = "current_screen", screen = "audio-results" }

            [[actions]]
            time_ms = 3300
            action = { type = "exit", code = 0 }
            "#,
        )
        .unwrap();

        assert_eq!(config.test.name, "Audio recording round trip");
        assert_eq!(config.actions.len(), 3);
        assert!(matches!(config.actions[0].action, ActionType::ClickRecord));
        assert!(matches!(
            config.actions[1].assert,
            Some(Assertion::CurrentScreen {
                screen: Screen::AudioResults
            })
        ));
    }

    #[test]
    fn test_parse_model_and_mode_actions() {
        let config = TestConfig::parse(
            r#"
            [test]
            name = "Model selection"

            [[actions]]
            time_ms = 0
            action = { type = "navigate", screen = "models" }

            [[actions]]
            time_ms = 50
            action = { type = "select_model", id = "advanced" }
            assert = { type = "selected_model", id = "advanced" }

            [[actions]]
            time_ms = 100
            action = { type = "set_mode", mode = "video" }

            [[actions]]
            time_ms = 200
            action = { type = "exit", code = 0 }
            "#,
        )
        .unwrap();

        assert!(matches!(
            config.actions[0].action,
            ActionType::Navigate {
                screen: Screen::Models
            }
        ));
        assert!(matches!(
            config.actions[2].action,
            ActionType::SetMode {
                mode: RecordingMode::Video
            }
        ));
    }

    #[test]
    fn test_reject_unordered_actions() {
        let err = TestConfig::parse(
            r#"
            [test]
            name = "Unordered"

            [[actions]]
            time_ms = 500
            action = { type = "click_record" }

            [[actions]]
            time_ms = 100
            action = { type = "exit" }
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("ordered"));
    }

    #[test]
    fn test_reject_missing_exit() {
        let err = TestConfig::parse(
            r#"
            [test]
            name = "No exit"

            [[actions]]
            time_ms = 0
            action = { type = "click_record" }
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("exit"));
    }

    #[test]
    fn test_reject_empty_scenario() {
        let err = TestConfig::parse(
            r#"
            [test]
            name = "Empty"
            actions = []
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("at least one action"));
    }
}
