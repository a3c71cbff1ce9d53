//! Scenario runner
//!
//! Schedules the actions of a [`TestConfig`] on the wall clock and checks
//! assertions against a snapshot of application state supplied by the UI.

use super::{ActionType, Assertion, TestConfig};
use crate::state::{RecordingMode, Screen};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Commands the runner hands to the app shell
#[derive(Debug, Clone)]
pub enum TestCommand {
    Navigate(Screen),
    SetMode(RecordingMode),
    ClickRecord,
    StopRecord,
    CancelRecord,
    SelectModel(String),
    ToggleTheme,
    Log(String),
    Exit { code: i32 },
}

/// Result of an assertion check
#[derive(Debug, Clone)]
pub enum AssertionResult {
    Passed,
    Failed(String),
}

/// State snapshot the UI passes in for assertion checking
pub struct AssertionContext {
    pub is_recording: bool,
    pub current_screen: Screen,
    pub elapsed_seconds: u32,
    pub selected_model: String,
    /// Displayed and target confidence of the active results screen
    pub confidence: Option<(u8, u8)>,
}

/// Executes scenario actions at their scheduled times
pub struct TestRunner {
    config: TestConfig,
    start_time: Option<Instant>,
    current_action_index: usize,
    completed: bool,
    test_passed: bool,
}

impl TestRunner {
    pub fn new(config: TestConfig) -> Self {
        info!("[TEST] Loaded scenario: {}", config.test.name);
        if !config.test.description.is_empty() {
            info!("[TEST] Description: {}", config.test.description);
        }
        info!("[TEST] Total actions: {}", config.actions.len());

        Self {
            config,
            start_time: None,
            current_action_index: 0,
            completed: false,
            test_passed: true,
        }
    }

    /// Start the scenario clock (call on the first frame)
    pub fn start(&mut self) {
        if self.start_time.is_none() {
            self.start_time = Some(Instant::now());
            info!("[TEST] Scenario started: {}", self.config.test.name);
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether every assertion passed (valid after completion)
    pub fn test_passed(&self) -> bool {
        self.test_passed
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Next command whose time has come, if any
    pub fn poll(&mut self) -> Option<(TestCommand, Option<Assertion>)> {
        if self.completed {
            return None;
        }

        let start_time = self.start_time?;
        let elapsed = start_time.elapsed();

        if self.current_action_index >= self.config.actions.len() {
            self.completed = true;
            return None;
        }

        let action = &self.config.actions[self.current_action_index];
        if elapsed < action.delay() {
            return None;
        }

        debug!(
            "[TEST] Executing action at {}ms: {:?}",
            action.time_ms, action.action
        );

        let command = match &action.action {
            ActionType::Navigate { screen } => TestCommand::Navigate(*screen),
            ActionType::SetMode { mode } => TestCommand::SetMode(*mode),
            ActionType::ClickRecord => TestCommand::ClickRecord,
            ActionType::StopRecord => TestCommand::StopRecord,
            ActionType::CancelRecord => TestCommand::CancelRecord,
            ActionType::SelectModel { id } => TestCommand::SelectModel(id.clone()),
            ActionType::ToggleTheme => TestCommand::ToggleTheme,
            ActionType::Log { message } => TestCommand::Log(message.clone()),
            ActionType::Exit { code } => TestCommand::Exit { code: *code },
        };
        let assertion = action.assert.clone();

        self.current_action_index += 1;
        if self.current_action_index >= self.config.actions.len() {
            self.completed = true;
        }

        Some((command, assertion))
    }

    /// Check an assertion against the given state snapshot
    pub fn check_assertion(
        &mut self,
        assertion: &Assertion,
        context: &AssertionContext,
    ) -> AssertionResult {
        let result = match assertion {
            Assertion::IsRecording => {
                if context.is_recording {
                    AssertionResult::Passed
                } else {
                    AssertionResult::Failed("expected a recording to be active".to_string())
                }
            }
            Assertion::IsIdle => {
                if !context.is_recording {
                    AssertionResult::Passed
                } else {
                    AssertionResult::Failed("expected no recording to be active".to_string())
                }
            }
            Assertion::CurrentScreen { screen } => {
                if context.current_screen == *screen {
                    AssertionResult::Passed
                } else {
                    AssertionResult::Failed(format!(
                        "expected screen {}, got {}",
                        screen, context.current_screen
                    ))
                }
            }
            Assertion::ElapsedSecondsMin { min_seconds } => {
                if context.elapsed_seconds >= *min_seconds {
                    AssertionResult::Passed
                } else {
                    AssertionResult::Failed(format!(
                        "expected at least {}s elapsed, got {}s",
                        min_seconds, context.elapsed_seconds
                    ))
                }
            }
            Assertion::SelectedModel { id } => {
                if context.selected_model == *id {
                    AssertionResult::Passed
                } else {
                    AssertionResult::Failed(format!(
                        "expected model '{}', got '{}'",
                        id, context.selected_model
                    ))
                }
            }
            Assertion::ConfidenceAtLeast { value } => match context.confidence {
                Some((displayed, _)) if displayed >= *value => AssertionResult::Passed,
                Some((displayed, _)) => AssertionResult::Failed(format!(
                    "expected confidence >= {}, got {}",
                    value, displayed
                )),
                None => {
                    AssertionResult::Failed("no results screen is active".to_string())
                }
            },
            Assertion::ConfidenceComplete => match context.confidence {
                Some((displayed, target)) if displayed == target => AssertionResult::Passed,
                Some((displayed, target)) => AssertionResult::Failed(format!(
                    "confidence at {} of {}",
                    displayed, target
                )),
                None => {
                    AssertionResult::Failed("no results screen is active".to_string())
                }
            },
        };

        match &result {
            AssertionResult::Passed => {
                info!("[TEST] PASS: Assertion {:?}", assertion);
            }
            AssertionResult::Failed(reason) => {
                error!("[TEST] FAIL: Assertion {:?} - {}", assertion, reason);
                self.test_passed = false;
            }
        }

        result
    }

    /// Human-readable result summary
    pub fn summary(&self) -> String {
        let status = if self.test_passed { "PASSED" } else { "FAILED" };
        format!(
            "[TEST] Scenario '{}' {}: executed {} actions in {:?}",
            self.config.test.name,
            status,
            self.current_action_index,
            self.elapsed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> AssertionContext {
        AssertionContext {
            is_recording: false,
            current_screen: Screen::Home,
            elapsed_seconds: 0,
            selected_model: "standard".to_string(),
            confidence: None,
        }
    }

    fn runner() -> TestRunner {
        TestRunner::new(
            TestConfig::parse(
                r#"
                [test]
                name = "assertion checks"

                [[actions]]
                time_ms = 0
                action = { type = "exit", code = 0 }
                "#,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_poll_waits_for_start() {
        let mut r = runner();
        assert!(r.poll().is_none());
        r.start();
        assert!(matches!(
            r.poll(),
            Some((TestCommand::Exit { code: 0 }, None))
        ));
        assert!(r.is_completed());
        assert!(r.poll().is_none());
    }

    #[test]
    fn test_screen_assertion() {
        let mut r = runner();
        let mut ctx = context();
        ctx.current_screen = Screen::AudioResults;

        let ok = r.check_assertion(
            &Assertion::CurrentScreen {
                screen: Screen::AudioResults,
            },
            &ctx,
        );
        assert!(matches!(ok, AssertionResult::Passed));
        assert!(r.test_passed());

        let bad = r.check_assertion(
            &Assertion::CurrentScreen {
                screen: Screen::Home,
            },
            &ctx,
        );
        assert!(matches!(bad, AssertionResult::Failed(_)));
        assert!(!r.test_passed());
    }

    #[test]
    fn test_elapsed_assertion() {
        let mut r = runner();
        let mut ctx = context();
        ctx.is_recording = true;
        ctx.elapsed_seconds = 3;

        assert!(matches!(
            r.check_assertion(&Assertion::ElapsedSecondsMin { min_seconds: 3 }, &ctx),
            AssertionResult::Passed
        ));
        assert!(matches!(
            r.check_assertion(&Assertion::ElapsedSecondsMin { min_seconds: 4 }, &ctx),
            AssertionResult::Failed(_)
        ));
    }

    #[test]
    fn test_confidence_assertions() {
        let mut r = runner();
        let mut ctx = context();

        assert!(matches!(
            r.check_assertion(&Assertion::ConfidenceComplete, &ctx),
            AssertionResult::Failed(_)
        ));

        ctx.confidence = Some((40, 87));
        assert!(matches!(
            r.check_assertion(&Assertion::ConfidenceAtLeast { value: 40 }, &ctx),
            AssertionResult::Passed
        ));
        assert!(matches!(
            r.check_assertion(&Assertion::ConfidenceComplete, &ctx),
            AssertionResult::Failed(_)
        ));

        ctx.confidence = Some((87, 87));
        assert!(matches!(
            r.check_assertion(&Assertion::ConfidenceComplete, &ctx),
            AssertionResult::Passed
        ));
    }
}
