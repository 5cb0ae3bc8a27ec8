use crate::models::error::{AppError, FetchKind};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> FetchState<T> {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Identifies one dispatched request: the selection it was made for, plus a
/// per-hook counter so that reselecting the same value still gets a fresh tag.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RequestTag {
    pub selection: String,
    pub generation: u64,
}

impl RequestTag {
    pub fn new(selection: impl Into<String>, generation: u64) -> Self {
        Self {
            selection: selection.into(),
            generation,
        }
    }
}

/// Bumps a hook's request counter and tags the request with `selection`.
pub fn next_tag(counter: &RefCell<u64>, selection: impl Into<String>) -> RequestTag {
    let mut generation = counter.borrow_mut();
    *generation += 1;
    RequestTag::new(selection, *generation)
}

pub enum FetchAction<T> {
    /// A request went out; drop whatever was shown before.
    Begin(RequestTag),
    /// A response came back. Ignored unless its tag is still current.
    Resolve(RequestTag, Result<T, String>),
    /// Nothing is selected any more.
    Reset,
}

/// Fetch lifecycle of one piece of component-local state.
#[derive(Clone, PartialEq, Debug)]
pub struct Fetch<T> {
    current: Option<RequestTag>,
    state: FetchState<T>,
}

impl<T> Fetch<T> {
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn current(&self) -> Option<&RequestTag> {
        self.current.as_ref()
    }
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Self {
            current: None,
            state: FetchState::Idle,
        }
    }
}

impl<T: 'static> Reducible for Fetch<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FetchAction::Begin(tag) => Rc::new(Self {
                current: Some(tag),
                state: FetchState::Loading,
            }),
            FetchAction::Resolve(tag, result) => {
                if self.current.as_ref() != Some(&tag) {
                    return self;
                }
                let state = match result {
                    Ok(data) => FetchState::Loaded(Rc::new(data)),
                    Err(message) => FetchState::Error(message),
                };
                Rc::new(Self {
                    current: Some(tag),
                    state,
                })
            }
            FetchAction::Reset => Rc::new(Self::default()),
        }
    }
}

/// Tags a new request for `selection` and announces it with one `Begin`.
pub fn begin_request<T>(
    counter: &RefCell<u64>,
    selection: impl Into<String>,
    dispatch: impl Fn(FetchAction<T>),
) -> RequestTag {
    let tag = next_tag(counter, selection);
    dispatch(FetchAction::Begin(tag.clone()));
    tag
}

/// Starts a request for `selection` and runs it in the background.
///
/// Failures are logged with their cause and stored as the generic message of
/// `kind`; the outcome is dropped by the reducer if a newer request started
/// in the meantime.
pub fn spawn_fetch<T, F>(
    dispatcher: UseReducerDispatcher<Fetch<T>>,
    counter: &RefCell<u64>,
    selection: impl Into<String>,
    kind: FetchKind,
    request: F,
) where
    T: 'static,
    F: Future<Output = Result<T, AppError>> + 'static,
{
    let tag = begin_request(counter, selection, |action| dispatcher.dispatch(action));

    spawn_local(async move {
        let result = request.await.map_err(|e| {
            gloo::console::error!(&format!("{} [{}]: {e}", kind.message(), tag.selection));
            kind.message().to_string()
        });
        dispatcher.dispatch(FetchAction::Resolve(tag, result));
    });
}
