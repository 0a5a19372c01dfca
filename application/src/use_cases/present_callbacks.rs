//! Callback presenter: renders agent event-loop callbacks in the terminal.
//!
//! [`CallbackPresenter`] consumes an open-ended sequence of
//! [`CallbackRecord`]s and keeps the terminal coherent: at most one thinking
//! indicator and at most one tool spinner are live at any time, and every
//! tool seen starting is timed until its result arrives.
//!
//! # Processing order per record
//!
//! ```text
//! 1. preempt thinking indicator   (data or current_tool_use present)
//! 2. indicator lifecycle          (init_event_loop / start_event_loop)
//! 3. reasoning stream
//! 4. throttle notice              (needs a console)
//! 5. force stop
//! 6. output stream
//! 7. tool input progress          (current_tool_use with input)
//! 8. message transitions          (assistant toolUse / user toolResult)
//! ```
//!
//! Rendering failures never escape [`CallbackPresenter::handle`]. They are
//! caught around the render calls only, so tool tracking state stays
//! consistent whatever the terminal does.

use crate::ports::clock::{Clock, SystemClock};
use crate::ports::notification::NotificationSink;
use crate::ports::rendering::{
    DisplayStyle, Indicator, RenderResult, Renderer, StreamKind, ToolSpinner,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError};
use strands_domain::{
    CallbackRecord, ChatMessage, CurrentToolUse, Role, Structured, ToolInvocation, ToolOutcome,
    ToolUseId, preparing_label, starting_label,
};
use tracing::{debug, warn};

const RETRIEVING_LABEL: &str = "retrieving memories...";
const THINKING_LABEL: &str = "thinking...";

/// Mutable presenter state, guarded as a whole by one mutex.
#[derive(Default)]
struct PresenterState {
    thinking_indicator: Option<Box<dyn Indicator>>,
    current_spinner: Option<Box<dyn ToolSpinner>>,
    current_tool_id: Option<ToolUseId>,
    tool_histories: HashMap<ToolUseId, ToolInvocation>,
}

/// Observable presenter state, for diagnostics and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenterSnapshot {
    pub has_thinking_indicator: bool,
    pub has_tool_spinner: bool,
    pub current_tool_id: Option<ToolUseId>,
    pub tool_histories: BTreeMap<ToolUseId, ToolInvocation>,
}

/// Presents event-loop callbacks on the terminal.
///
/// Construct one presenter per agent session and hand [`Self::callback`] to
/// the runtime. `handle` may be called from several threads; each call holds
/// the state lock for its whole duration.
pub struct CallbackPresenter {
    renderer: Arc<dyn Renderer>,
    clock: Arc<dyn Clock>,
    notifier: Option<Arc<dyn NotificationSink>>,
    state: Mutex<PresenterState>,
}

impl CallbackPresenter {
    pub fn new(renderer: Arc<dyn Renderer>) -> Self {
        Self {
            renderer,
            clock: Arc::new(SystemClock),
            notifier: None,
            state: Mutex::new(PresenterState::default()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Send a notification whenever a tracked tool completes.
    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationSink>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// A free-standing callback bound to this presenter.
    pub fn callback(self: &Arc<Self>) -> impl Fn(&CallbackRecord) + Send + Sync + use<> {
        let presenter = Arc::clone(self);
        move |record| presenter.handle(record)
    }

    /// Process one callback record. Never panics on rendering failures.
    pub fn handle(&self, record: &CallbackRecord) {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let state = &mut *guard;

        self.cycle_thinking_indicator(state, record);

        if let Some(reasoning) = record.reasoning() {
            render(
                "reasoning",
                self.renderer
                    .write_stream(StreamKind::Reasoning, reasoning, false),
            );
        }

        if let (Some(delay), Some(console)) = (record.throttle_delay(), record.console) {
            if let Some(spinner) = state.current_spinner.as_mut() {
                render("tool spinner stop", spinner.stop());
            }
            render(
                "throttle notice",
                self.renderer.throttle_notice(console, delay),
            );
        }

        if record.force_stop {
            self.force_stop(state);
        }

        if let Some(data) = record.output_text() {
            render(
                "output",
                self.renderer
                    .write_stream(StreamKind::Output, data, record.complete),
            );
        }

        // Malformed sub-records are skipped with a warning in every build,
        // including tests, so replayed input from other runtimes never aborts.
        match &record.current_tool_use {
            Some(Structured::Valid(tool)) => self.track_tool_input(state, tool),
            Some(Structured::Malformed(raw)) => {
                warn!("Skipping malformed current_tool_use: {}", raw);
            }
            None => {}
        }

        match &record.message {
            Some(Structured::Valid(message)) => self.apply_message(state, message),
            Some(Structured::Malformed(raw)) => {
                warn!("Skipping malformed message: {}", raw);
            }
            None => {}
        }
    }

    /// Snapshot of the current state.
    pub fn snapshot(&self) -> PresenterSnapshot {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        PresenterSnapshot {
            has_thinking_indicator: state.thinking_indicator.is_some(),
            has_tool_spinner: state.current_spinner.is_some(),
            current_tool_id: state.current_tool_id.clone(),
            tool_histories: state
                .tool_histories
                .iter()
                .map(|(id, invocation)| (id.clone(), invocation.clone()))
                .collect(),
        }
    }

    /// Steps 1-2. Overlapping indicator lifecycles are expected under
    /// interleaved delivery, so every failure here is discarded.
    fn cycle_thinking_indicator(&self, state: &mut PresenterState, record: &CallbackRecord) {
        if (record.output_text().is_some() || record.has_tool_use())
            && let Some(mut indicator) = state.thinking_indicator.take()
        {
            tolerate_overlap(indicator.stop());
        }

        if record.init_event_loop {
            if let Some(mut previous) = state.thinking_indicator.take() {
                tolerate_overlap(previous.stop());
            }
            let mut indicator = self
                .renderer
                .indicator(record.console.unwrap_or_default(), DisplayStyle::Thinking);
            if tolerate_overlap(indicator.start(RETRIEVING_LABEL)) {
                state.thinking_indicator = Some(indicator);
            }
        }

        if record.start_event_loop
            && let Some(indicator) = state.thinking_indicator.as_mut()
        {
            tolerate_overlap(indicator.update(THINKING_LABEL));
        }
    }

    fn force_stop(&self, state: &mut PresenterState) {
        if let Some(mut indicator) = state.thinking_indicator.take() {
            render("thinking indicator stop", indicator.stop());
        }
        if let Some(spinner) = state.current_spinner.as_mut() {
            render("tool spinner stop", spinner.stop());
        }
    }

    /// Step 7: start a spinner for a newly seen tool and show input growth.
    fn track_tool_input(&self, state: &mut PresenterState, tool: &CurrentToolUse) {
        if !tool.has_input() {
            return;
        }
        let (Some(id), Some(name)) = (tool.tool_use_id.as_ref(), tool.name.as_deref()) else {
            warn!("Skipping current_tool_use without toolUseId or name");
            return;
        };

        if state.current_tool_id.as_ref() != Some(id) {
            if let Some(mut previous) = state.current_spinner.take() {
                render("tool spinner stop", previous.stop());
            }

            let mut spinner = self.renderer.tool_spinner(DisplayStyle::Running);
            render("tool spinner start", spinner.start(&preparing_label(name)));
            state.current_spinner = Some(spinner);
            state.current_tool_id = Some(id.clone());
            state
                .tool_histories
                .insert(id.clone(), ToolInvocation::new(name, self.clock.now()));
            debug!("Tracking tool {} ({})", name, id);
        }

        let size = tool.input_size();
        if let Some(invocation) = state.tool_histories.get_mut(id)
            && invocation.observe_input(size)
            && let Some(spinner) = state.current_spinner.as_mut()
        {
            render(
                "tool spinner update",
                spinner.update(&invocation.progress_label()),
            );
        }
    }

    /// Step 8: announce tool calls and resolve tool results.
    fn apply_message(&self, state: &mut PresenterState, message: &ChatMessage) {
        match message.role {
            Role::Assistant => {
                for tool_use in message.tool_uses() {
                    let Some(name) = tool_use.name.as_deref() else {
                        warn!("Skipping toolUse without a name");
                        continue;
                    };
                    if let Some(spinner) = state.current_spinner.as_mut() {
                        render("tool spinner info", spinner.info(&starting_label(name)));
                    }
                }
            }
            Role::User => {
                for result in message.tool_results() {
                    let Some(id) = result.tool_use_id.as_ref() else {
                        warn!("Skipping toolResult without a toolUseId");
                        continue;
                    };
                    let Some(invocation) = state.tool_histories.remove(id) else {
                        debug!("Ignoring result for untracked tool {}", id);
                        continue;
                    };

                    let duration = invocation.elapsed_secs(self.clock.now());
                    let outcome = ToolOutcome::from_result(result);
                    let summary = outcome.message(invocation.name(), duration);

                    if let Some(spinner) = state.current_spinner.as_mut() {
                        let rendered = if outcome.is_success() {
                            spinner.succeed(&summary)
                        } else {
                            spinner.fail(&summary)
                        };
                        render("tool spinner result", rendered);
                    }
                    if let Some(notifier) = &self.notifier {
                        notifier.notify(invocation.name(), &summary);
                    }

                    state.current_spinner = None;
                    state.current_tool_id = None;
                }
            }
            Role::Other => {}
        }
    }
}

/// Discard an indicator failure. Returns whether the call succeeded.
fn tolerate_overlap(result: RenderResult) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            debug!("Ignoring indicator overlap: {}", e);
            false
        }
    }
}

/// Log and discard a rendering failure outside the indicator lifecycle.
fn render(what: &str, result: RenderResult) {
    if let Err(e) = result {
        debug!("Rendering {} failed: {}", what, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::rendering::RenderError;
    use std::time::{Duration, Instant};
    use strands_domain::{ConsoleTarget, ContentBlock, ToolResultStatus};

    // ==================== Test Doubles ====================

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        IndicatorStart(ConsoleTarget, String),
        IndicatorUpdate(String),
        IndicatorStop,
        SpinnerStart(usize, String),
        SpinnerUpdate(usize, String),
        SpinnerSucceed(usize, String),
        SpinnerFail(usize, String),
        SpinnerInfo(usize, String),
        SpinnerStop(usize),
        Stream(StreamKind, String, bool),
        Throttle(ConsoleTarget, f64),
    }

    #[derive(Default)]
    struct Journal {
        events: Mutex<Vec<Event>>,
        spinners: Mutex<usize>,
    }

    impl Journal {
        fn push(&self, event: Event) {
            self.events.lock().unwrap().push(event);
        }

        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }

        fn clear(&self) {
            self.events.lock().unwrap().clear();
        }
    }

    struct RecordingIndicator {
        journal: Arc<Journal>,
        console: ConsoleTarget,
        refuse: bool,
    }

    impl Indicator for RecordingIndicator {
        fn start(&mut self, label: &str) -> RenderResult {
            if self.refuse {
                return Err(RenderError::LiveDisplayActive);
            }
            self.journal
                .push(Event::IndicatorStart(self.console, label.to_string()));
            Ok(())
        }

        fn update(&mut self, label: &str) -> RenderResult {
            self.journal.push(Event::IndicatorUpdate(label.to_string()));
            Ok(())
        }

        fn stop(&mut self) -> RenderResult {
            if self.refuse {
                return Err(RenderError::LiveDisplayActive);
            }
            self.journal.push(Event::IndicatorStop);
            Ok(())
        }
    }

    struct RecordingSpinner {
        journal: Arc<Journal>,
        index: usize,
    }

    impl ToolSpinner for RecordingSpinner {
        fn start(&mut self, label: &str) -> RenderResult {
            self.journal
                .push(Event::SpinnerStart(self.index, label.to_string()));
            Ok(())
        }

        fn update(&mut self, label: &str) -> RenderResult {
            self.journal
                .push(Event::SpinnerUpdate(self.index, label.to_string()));
            Ok(())
        }

        fn succeed(&mut self, label: &str) -> RenderResult {
            self.journal
                .push(Event::SpinnerSucceed(self.index, label.to_string()));
            Ok(())
        }

        fn fail(&mut self, label: &str) -> RenderResult {
            self.journal
                .push(Event::SpinnerFail(self.index, label.to_string()));
            Ok(())
        }

        fn info(&mut self, label: &str) -> RenderResult {
            self.journal
                .push(Event::SpinnerInfo(self.index, label.to_string()));
            Ok(())
        }

        fn stop(&mut self) -> RenderResult {
            self.journal.push(Event::SpinnerStop(self.index));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        journal: Arc<Journal>,
        refuse_indicators: bool,
    }

    impl Renderer for RecordingRenderer {
        fn indicator(&self, console: ConsoleTarget, _style: DisplayStyle) -> Box<dyn Indicator> {
            Box::new(RecordingIndicator {
                journal: Arc::clone(&self.journal),
                console,
                refuse: self.refuse_indicators,
            })
        }

        fn tool_spinner(&self, _style: DisplayStyle) -> Box<dyn ToolSpinner> {
            let mut count = self.journal.spinners.lock().unwrap();
            *count += 1;
            Box::new(RecordingSpinner {
                journal: Arc::clone(&self.journal),
                index: *count,
            })
        }

        fn write_stream(&self, kind: StreamKind, text: &str, end_line: bool) -> RenderResult {
            self.journal
                .push(Event::Stream(kind, text.to_string(), end_line));
            Ok(())
        }

        fn throttle_notice(&self, console: ConsoleTarget, delay_secs: f64) -> RenderResult {
            self.journal.push(Event::Throttle(console, delay_secs));
            Ok(())
        }
    }

    struct ManualClock {
        base: Instant,
        offset: Mutex<Duration>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                base: Instant::now(),
                offset: Mutex::new(Duration::ZERO),
            }
        }

        fn advance(&self, by: Duration) {
            *self.offset.lock().unwrap() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.base + *self.offset.lock().unwrap()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<(String, String)>>,
    }

    impl NotificationSink for RecordingNotifier {
        fn notify(&self, title: &str, message: &str) {
            self.sent
                .lock()
                .unwrap()
                .push((title.to_string(), message.to_string()));
        }
    }

    struct Harness {
        presenter: CallbackPresenter,
        journal: Arc<Journal>,
        clock: Arc<ManualClock>,
    }

    fn harness() -> Harness {
        harness_with(RecordingRenderer::default())
    }

    fn harness_with(renderer: RecordingRenderer) -> Harness {
        let journal = Arc::clone(&renderer.journal);
        let clock = Arc::new(ManualClock::new());
        let presenter = CallbackPresenter::new(Arc::new(renderer)).with_clock(clock.clone());
        Harness {
            presenter,
            journal,
            clock,
        }
    }

    fn tool_input(id: &str, name: &str, input: &str) -> CallbackRecord {
        CallbackRecord::new().with_tool_use(id, name, input)
    }

    fn tool_result(id: &str, status: ToolResultStatus) -> CallbackRecord {
        CallbackRecord::new().with_message(ChatMessage::user(vec![ContentBlock::tool_result(
            id, status,
        )]))
    }

    fn tracked_ids(presenter: &CallbackPresenter) -> Vec<String> {
        presenter
            .snapshot()
            .tool_histories
            .keys()
            .map(|id| id.to_string())
            .collect()
    }

    // ==================== Streams and Indicator ====================

    #[test]
    fn test_records_without_tools_leave_tracking_empty() {
        let h = harness();
        let records = [
            CallbackRecord::new().with_init_event_loop(),
            CallbackRecord::new().with_start_event_loop(),
            CallbackRecord::new().with_reasoning("pondering"),
            CallbackRecord::new().with_data("Hel", false),
            CallbackRecord::new().with_data("lo", true),
            CallbackRecord::new().with_force_stop(),
        ];
        for record in &records {
            h.presenter.handle(record);
        }

        let snapshot = h.presenter.snapshot();
        assert!(snapshot.tool_histories.is_empty());
        assert_eq!(snapshot.current_tool_id, None);
    }

    #[test]
    fn test_indicator_lifecycle() {
        let h = harness();
        h.presenter.handle(
            &CallbackRecord::new()
                .with_init_event_loop()
                .with_console(ConsoleTarget::Stderr),
        );
        h.presenter
            .handle(&CallbackRecord::new().with_start_event_loop());
        assert!(h.presenter.snapshot().has_thinking_indicator);

        h.presenter
            .handle(&CallbackRecord::new().with_data("Hi", true));

        assert_eq!(
            h.journal.events(),
            vec![
                Event::IndicatorStart(ConsoleTarget::Stderr, "retrieving memories...".into()),
                Event::IndicatorUpdate("thinking...".into()),
                Event::IndicatorStop,
                Event::Stream(StreamKind::Output, "Hi".into(), true),
            ]
        );
        assert!(!h.presenter.snapshot().has_thinking_indicator);
    }

    #[test]
    fn test_indicator_defaults_to_stdout() {
        let h = harness();
        h.presenter
            .handle(&CallbackRecord::new().with_init_event_loop());
        assert_eq!(
            h.journal.events(),
            vec![Event::IndicatorStart(
                ConsoleTarget::Stdout,
                "retrieving memories...".into()
            )]
        );
    }

    #[test]
    fn test_start_without_indicator_is_noop() {
        let h = harness();
        h.presenter
            .handle(&CallbackRecord::new().with_start_event_loop());
        assert!(h.journal.events().is_empty());
    }

    #[test]
    fn test_tool_input_preempts_indicator_before_spinner() {
        let h = harness();
        h.presenter
            .handle(&CallbackRecord::new().with_init_event_loop());
        h.journal.clear();

        h.presenter.handle(&tool_input("A", "shell", "{\"c"));

        let events = h.journal.events();
        assert_eq!(events[0], Event::IndicatorStop);
        assert_eq!(events[1], Event::SpinnerStart(1, "shell: Preparing...".into()));
    }

    #[test]
    fn test_reinit_stops_previous_indicator() {
        let h = harness();
        h.presenter
            .handle(&CallbackRecord::new().with_init_event_loop());
        h.presenter
            .handle(&CallbackRecord::new().with_init_event_loop());

        let events = h.journal.events();
        assert_eq!(
            events,
            vec![
                Event::IndicatorStart(ConsoleTarget::Stdout, "retrieving memories...".into()),
                Event::IndicatorStop,
                Event::IndicatorStart(ConsoleTarget::Stdout, "retrieving memories...".into()),
            ]
        );
    }

    #[test]
    fn test_indicator_overlap_errors_are_swallowed() {
        let h = harness_with(RecordingRenderer {
            refuse_indicators: true,
            ..Default::default()
        });
        h.presenter
            .handle(&CallbackRecord::new().with_init_event_loop().with_data("x", false));

        assert!(!h.presenter.snapshot().has_thinking_indicator);
        assert_eq!(
            h.journal.events(),
            vec![Event::Stream(StreamKind::Output, "x".into(), false)]
        );
    }

    #[test]
    fn test_streams_respect_completion() {
        let h = harness();
        h.presenter
            .handle(&CallbackRecord::new().with_reasoning("why"));
        h.presenter
            .handle(&CallbackRecord::new().with_data("partial", false));
        h.presenter
            .handle(&CallbackRecord::new().with_data("final", true));

        assert_eq!(
            h.journal.events(),
            vec![
                Event::Stream(StreamKind::Reasoning, "why".into(), false),
                Event::Stream(StreamKind::Output, "partial".into(), false),
                Event::Stream(StreamKind::Output, "final".into(), true),
            ]
        );
    }

    // ==================== Throttle and Force Stop ====================

    #[test]
    fn test_throttle_with_console_stops_spinner_and_notifies_once() {
        let h = harness();
        h.presenter.handle(&tool_input("A", "shell", "{"));
        h.journal.clear();

        h.presenter.handle(
            &CallbackRecord::new()
                .with_throttle(5.0)
                .with_console(ConsoleTarget::Stdout),
        );

        assert_eq!(
            h.journal.events(),
            vec![
                Event::SpinnerStop(1),
                Event::Throttle(ConsoleTarget::Stdout, 5.0)
            ]
        );
    }

    #[test]
    fn test_throttle_without_console_emits_nothing() {
        let h = harness();
        h.presenter.handle(&tool_input("A", "shell", "{"));
        h.journal.clear();

        h.presenter
            .handle(&CallbackRecord::new().with_throttle(5.0));

        assert!(h.journal.events().is_empty());
    }

    #[test]
    fn test_force_stop_is_idempotent() {
        let h = harness();
        h.presenter
            .handle(&CallbackRecord::new().with_force_stop());
        assert!(h.journal.events().is_empty());

        h.presenter
            .handle(&CallbackRecord::new().with_init_event_loop());
        h.presenter.handle(&tool_input("A", "shell", "{"));
        h.presenter
            .handle(&CallbackRecord::new().with_init_event_loop());
        h.journal.clear();

        h.presenter
            .handle(&CallbackRecord::new().with_force_stop());
        h.presenter
            .handle(&CallbackRecord::new().with_force_stop());

        let events = h.journal.events();
        assert_eq!(
            events,
            vec![
                Event::IndicatorStop,
                Event::SpinnerStop(1),
                Event::SpinnerStop(1)
            ]
        );
        assert!(!h.presenter.snapshot().has_thinking_indicator);
    }

    // ==================== Tool Tracking ====================

    #[test]
    fn test_tool_start_then_success_clears_state() {
        let h = harness();
        h.presenter.handle(&tool_input("A", "shell", "{\"command\""));

        let snapshot = h.presenter.snapshot();
        assert_eq!(snapshot.tool_histories.len(), 1);
        assert_eq!(snapshot.current_tool_id, Some(ToolUseId::new("A")));

        h.clock.advance(Duration::from_millis(1500));
        h.presenter
            .handle(&tool_result("A", ToolResultStatus::Success));

        let snapshot = h.presenter.snapshot();
        assert!(snapshot.tool_histories.is_empty());
        assert_eq!(snapshot.current_tool_id, None);
        assert!(!snapshot.has_tool_spinner);
        assert!(
            h.journal
                .events()
                .contains(&Event::SpinnerSucceed(1, "shell completed in 1.5s".into()))
        );
    }

    #[test]
    fn test_failed_result_marks_spinner_failed() {
        let h = harness();
        h.presenter.handle(&tool_input("A", "http_request", "{"));
        h.clock.advance(Duration::from_millis(2346));
        h.presenter
            .handle(&tool_result("A", ToolResultStatus::Error));

        assert_eq!(
            h.journal.events().last(),
            Some(&Event::SpinnerFail(
                1,
                "http_request failed after 2.35s".into()
            ))
        );
    }

    #[test]
    fn test_progress_updates_only_on_growth() {
        let h = harness();
        let inputs = [
            "12345".to_string(),
            "x".repeat(12),
            "y".repeat(12),
            "z".repeat(20),
        ];
        for input in &inputs {
            h.presenter.handle(&tool_input("A", "editor", input));
        }

        let updates: Vec<Event> = h
            .journal
            .events()
            .into_iter()
            .filter(|e| matches!(e, Event::SpinnerUpdate(..)))
            .collect();
        assert_eq!(
            updates,
            vec![
                Event::SpinnerUpdate(1, "editor: 5 chars".into()),
                Event::SpinnerUpdate(1, "editor: 12 chars".into()),
                Event::SpinnerUpdate(1, "editor: 20 chars".into()),
            ]
        );
        let snapshot = h.presenter.snapshot();
        assert_eq!(
            snapshot.tool_histories[&ToolUseId::new("A")].max_input_size_seen(),
            20
        );
    }

    #[test]
    fn test_shrinking_input_is_ignored() {
        let h = harness();
        h.presenter.handle(&tool_input("A", "editor", "0123456789"));
        h.presenter.handle(&tool_input("A", "editor", "0123"));

        let updates = h
            .journal
            .events()
            .into_iter()
            .filter(|e| matches!(e, Event::SpinnerUpdate(..)))
            .count();
        assert_eq!(updates, 1);
    }

    #[test]
    fn test_new_tool_stops_previous_spinner_and_keeps_history() {
        let h = harness();
        h.presenter.handle(&tool_input("A", "shell", "{"));
        h.presenter.handle(&tool_input("B", "editor", "{"));

        let events = h.journal.events();
        let stop_a = events
            .iter()
            .position(|e| *e == Event::SpinnerStop(1))
            .unwrap();
        let start_b = events
            .iter()
            .position(|e| *e == Event::SpinnerStart(2, "editor: Preparing...".into()))
            .unwrap();
        assert!(stop_a < start_b);

        assert_eq!(tracked_ids(&h.presenter), vec!["A", "B"]);
        assert_eq!(
            h.presenter.snapshot().current_tool_id,
            Some(ToolUseId::new("B"))
        );
    }

    #[test]
    fn test_tool_use_without_input_is_ignored() {
        let h = harness();
        h.presenter.handle(&tool_input("A", "shell", ""));

        assert!(h.presenter.snapshot().tool_histories.is_empty());
        assert!(h.journal.events().is_empty());
    }

    #[test]
    fn test_untracked_result_is_noop() {
        let h = harness();
        h.presenter.handle(&tool_input("A", "shell", "{"));
        let before = h.presenter.snapshot();
        h.journal.clear();

        h.presenter
            .handle(&tool_result("ghost", ToolResultStatus::Success));

        assert_eq!(h.presenter.snapshot(), before);
        assert!(h.journal.events().is_empty());
    }

    #[test]
    fn test_assistant_tool_use_posts_info() {
        let h = harness();
        h.presenter.handle(&tool_input("A", "shell", "{"));
        h.presenter.handle(&CallbackRecord::new().with_message(ChatMessage::assistant(
            vec![
                ContentBlock::text("running it"),
                ContentBlock::tool_use("A", "shell"),
            ],
        )));

        assert_eq!(
            h.journal.events().last(),
            Some(&Event::SpinnerInfo(1, "Starting shell...".into()))
        );
        assert_eq!(
            h.presenter.snapshot().current_tool_id,
            Some(ToolUseId::new("A"))
        );
    }

    #[test]
    fn test_assistant_tool_use_without_spinner_renders_nothing() {
        let h = harness();
        h.presenter.handle(&CallbackRecord::new().with_message(ChatMessage::assistant(
            vec![ContentBlock::tool_use("A", "shell")],
        )));
        assert!(h.journal.events().is_empty());
    }

    #[test]
    fn test_result_after_newer_tool_keeps_newer_history() {
        let h = harness();
        h.presenter.handle(&tool_input("A", "shell", "{"));
        h.presenter.handle(&tool_input("B", "editor", "{"));
        h.presenter
            .handle(&tool_result("A", ToolResultStatus::Success));

        assert_eq!(tracked_ids(&h.presenter), vec!["B"]);
        assert_eq!(h.presenter.snapshot().current_tool_id, None);
    }

    #[test]
    fn test_notifier_receives_completion() {
        let notifier = Arc::new(RecordingNotifier::default());
        let h = harness();
        let presenter = h.presenter.with_notifier(notifier.clone());

        presenter.handle(&tool_input("A", "shell", "{"));
        h.clock.advance(Duration::from_millis(250));
        presenter.handle(&tool_result("A", ToolResultStatus::Success));

        assert_eq!(
            notifier.sent.lock().unwrap().clone(),
            vec![("shell".to_string(), "shell completed in 0.25s".to_string())]
        );
    }

    // ==================== Malformed Records ====================

    #[test]
    fn test_malformed_sub_updates_are_skipped() {
        let h = harness();
        let record: CallbackRecord = serde_json::from_str(
            r#"{"data": "ok", "message": "oops", "current_tool_use": "shell"}"#,
        )
        .unwrap();
        h.presenter.handle(&record);

        assert_eq!(
            h.journal.events(),
            vec![Event::Stream(StreamKind::Output, "ok".into(), false)]
        );
        assert!(h.presenter.snapshot().tool_histories.is_empty());
    }

    #[test]
    fn test_tool_use_without_id_is_skipped() {
        let h = harness();
        let record: CallbackRecord =
            serde_json::from_str(r#"{"current_tool_use": {"name": "shell", "input": "{"}}"#)
                .unwrap();
        h.presenter.handle(&record);
        assert!(h.presenter.snapshot().tool_histories.is_empty());
    }

    // ==================== Concurrency ====================

    #[test]
    fn test_concurrent_delivery_keeps_histories_consistent() {
        let h = harness();
        let presenter = Arc::new(h.presenter);
        let callback = presenter.callback();

        std::thread::scope(|scope| {
            for worker in 0..4 {
                let callback = &callback;
                scope.spawn(move || {
                    for step in 0..25 {
                        let id = format!("tool-{}-{}", worker, step);
                        callback(&tool_input(&id, "shell", "{\"x\": 1}"));
                        callback(&tool_result(&id, ToolResultStatus::Success));
                    }
                });
            }
        });

        assert!(presenter.snapshot().tool_histories.is_empty());
    }
}
