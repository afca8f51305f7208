use std::cell::RefCell;
use std::path::PathBuf;

use schedule_core::{Effect, Presenter, RenderedResult, ViewState};

/// Prints results to stdout and progress to stderr.
///
/// The YouGile pre-fill has no form to land in here; with `save_to` set the
/// schedule text is written to that file instead.
pub struct TerminalPresenter {
    view: RefCell<ViewState>,
    save_to: Option<PathBuf>,
    last_result: RefCell<Option<RenderedResult>>,
}

impl TerminalPresenter {
    pub fn new(save_to: Option<PathBuf>) -> Self {
        Self {
            view: RefCell::new(ViewState::default()),
            save_to,
            last_result: RefCell::new(None),
        }
    }

    pub fn last_result(&self) -> Option<RenderedResult> {
        self.last_result.borrow().clone()
    }
}

impl Presenter for TerminalPresenter {
    fn set_loading(&self, visible: bool) {
        if visible {
            eprintln!("Sending request...");
        }
    }

    fn show_result(&self, result: RenderedResult) {
        print!("{result}");
        *self.last_result.borrow_mut() = Some(result);
    }

    fn update_view(&self, update: impl FnOnce(&mut ViewState) -> Vec<Effect>) -> Vec<Effect> {
        update(&mut self.view.borrow_mut())
    }

    fn apply(&self, effect: Effect) {
        match effect {
            Effect::FillScheduleData(text) => {
                let Some(path) = &self.save_to else { return };
                match std::fs::write(path, format!("{text}\n")) {
                    Ok(()) => eprintln!("Wrote {}", path.display()),
                    Err(e) => eprintln!("Warning: failed to write {}: {e}", path.display()),
                }
            }
            Effect::FillScheduleName(name) => {
                if let Some(path) = &self.save_to {
                    eprintln!(
                        "Next: schedule-desk integrate --schedule-file {} --schedule-name \"{name}\"",
                        path.display()
                    );
                }
            }
        }
    }
}
