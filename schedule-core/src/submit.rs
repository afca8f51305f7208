//! One form submission from collected fields to rendered result.
//!
//! `Idle → Submitting → {Success, LocalValidationError, NetworkError,
//! ApiError} → Idle`. Local validation failures never reach the network and
//! never show the busy indicator.

use log::{error, info, warn};
use serde::Serialize;

use crate::client::{ApiClient, Endpoint, Transport};
use crate::forms::{self, FormError, FormFields};
use crate::outcome::ApiError;
use crate::render::RenderedResult;
use crate::types::{
    AnalysisRequest, CommonWindowParameters, ParseRequest, Schedule, SplitWindowParameters,
    YougileRequest,
};
use crate::view_state::{Effect, UiEvent, ViewState};

pub const NETWORK_ERROR_HEADLINE: &str = "Ошибка сети";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Parse,
    Yougile,
    CommonWindow,
    SplitWindow,
}

impl FormKind {
    pub const ALL: &'static [FormKind] = &[
        Self::Parse,
        Self::Yougile,
        Self::CommonWindow,
        Self::SplitWindow,
    ];

    /// Element id of the form in the page.
    pub fn form_id(self) -> &'static str {
        match self {
            Self::Parse => "parse-form",
            Self::Yougile => "yougile-form",
            Self::CommonWindow => "common-form",
            Self::SplitWindow => "split-form",
        }
    }

    pub fn endpoint(self) -> Endpoint {
        match self {
            Self::Parse => Endpoint::Parse,
            Self::Yougile => Endpoint::YougileIntegrate,
            Self::CommonWindow => Endpoint::CommonWindow,
            Self::SplitWindow => Endpoint::SplitWindow,
        }
    }

    pub fn success_headline(self) -> &'static str {
        match self {
            Self::Parse => "Парсинг завершен успешно!",
            Self::Yougile => "Интеграция с YouGile завершена успешно!",
            Self::CommonWindow => "Поиск общего окна завершен!",
            Self::SplitWindow => "Поиск сплит окна завершен!",
        }
    }

    pub fn error_headline(self) -> &'static str {
        match self {
            Self::Parse => "Ошибка парсинга",
            Self::Yougile => "Ошибка интеграции с YouGile",
            Self::CommonWindow => "Ошибка поиска общего окна",
            Self::SplitWindow => "Ошибка поиска сплит окна",
        }
    }
}

/// A collected request body, ready to send.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Prepared {
    Parse(ParseRequest),
    Yougile(YougileRequest),
    CommonWindow(AnalysisRequest<CommonWindowParameters>),
    SplitWindow(AnalysisRequest<SplitWindowParameters>),
}

impl Prepared {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Parse(_) => FormKind::Parse,
            Self::Yougile(_) => FormKind::Yougile,
            Self::CommonWindow(_) => FormKind::CommonWindow,
            Self::SplitWindow(_) => FormKind::SplitWindow,
        }
    }
}

/// Run the collector for `kind`.
pub fn prepare(kind: FormKind, fields: &FormFields) -> Result<Prepared, FormError> {
    Ok(match kind {
        FormKind::Parse => Prepared::Parse(forms::collect_parse(fields)),
        FormKind::Yougile => Prepared::Yougile(forms::collect_yougile(fields)?),
        FormKind::CommonWindow => Prepared::CommonWindow(forms::collect_common_window(fields)?),
        FormKind::SplitWindow => Prepared::SplitWindow(forms::collect_split_window(fields)?),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    LocalValidationError,
    NetworkError,
    ApiError,
}

/// The page-side singletons a submission writes to.
///
/// Every method takes `&self`: implementations sit on reactive signals or
/// cells, and a second submission may be writing at the same time.
pub trait Presenter {
    fn set_loading(&self, visible: bool);

    /// Replace whatever result is currently shown.
    fn show_result(&self, result: RenderedResult);

    /// Run `update` against the shared view state and return its effects.
    fn update_view(&self, update: impl FnOnce(&mut ViewState) -> Vec<Effect>) -> Vec<Effect>;

    fn apply(&self, effect: Effect);

    /// Feed one event through the view state and apply what it produces.
    fn dispatch(&self, event: UiEvent) {
        for effect in self.update_view(|view| view.handle(event)) {
            self.apply(effect);
        }
    }
}

/// Keeps the busy indicator visible for its lifetime.
///
/// Hiding happens in `Drop`, so it also runs when the request future is
/// dropped before completion.
pub struct BusyGuard<'a, P: Presenter> {
    presenter: &'a P,
}

impl<'a, P: Presenter> BusyGuard<'a, P> {
    pub fn show(presenter: &'a P) -> Self {
        presenter.set_loading(true);
        Self { presenter }
    }
}

impl<P: Presenter> Drop for BusyGuard<'_, P> {
    fn drop(&mut self) {
        self.presenter.set_loading(false);
    }
}

/// Submit one form. Every failure ends up rendered; nothing is returned as
/// an error.
pub async fn submit_form<T, P>(
    client: &ApiClient<T>,
    presenter: &P,
    kind: FormKind,
    fields: &FormFields,
) -> SubmissionOutcome
where
    T: Transport,
    P: Presenter,
{
    let request = match prepare(kind, fields) {
        Ok(request) => request,
        Err(err) => {
            warn!("{}: {err}", kind.form_id());
            presenter.show_result(RenderedResult::error(err.headline(), &err.outcome()));
            return SubmissionOutcome::LocalValidationError;
        }
    };

    info!("{} -> {}", kind.form_id(), kind.endpoint().path());
    let result = {
        let _busy = BusyGuard::show(presenter);
        client.submit(kind.endpoint(), &request).await
    };

    match result {
        Ok(outcome) => {
            if let Prepared::Parse(parse) = &request {
                let schedule = outcome
                    .data
                    .as_ref()
                    .and_then(|d| d.get("schedule"))
                    .filter(|s| !s.is_null())
                    .cloned()
                    .map(Schedule);
                presenter.dispatch(UiEvent::ParseSucceeded {
                    name: parse.name.clone(),
                    schedule,
                });
            }
            presenter.show_result(RenderedResult::success(kind.success_headline(), &outcome));
            SubmissionOutcome::Success
        }
        Err(err @ ApiError::Rejected { .. }) => {
            error!("{} rejected: {err}", kind.endpoint().path());
            presenter.show_result(RenderedResult::error(kind.error_headline(), &err.outcome()));
            SubmissionOutcome::ApiError
        }
        Err(err) => {
            error!("{} failed: {err}", kind.endpoint().path());
            presenter.show_result(RenderedResult::error(NETWORK_ERROR_HEADLINE, &err.outcome()));
            SubmissionOutcome::NetworkError
        }
    }
}
