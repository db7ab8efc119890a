//! Client-side state machine for a todo list view.
//!
//! The browser client keeps its list, filter and view mode as one explicit
//! state value and a pure reducer over fetch outcomes, instead of a pile of
//! loading/editing flags. Rendering and transport stay outside; the reducer
//! only ever sees the envelope results of fetches.

use crate::types::dto::todo::TodoResponse;

/// What the view is currently doing.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    /// An edit form is open for this todo
    Editing(Box<TodoResponse>),
    /// Last fetch failed; the message is logged, the list is kept as-is
    Error(String),
}

/// List filter, matching the three filter buttons of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

/// Fetch outcomes and user intents that drive the state machine.
#[derive(Debug, Clone)]
pub enum Event {
    FetchStarted,
    FetchSucceeded(Vec<TodoResponse>),
    FetchFailed(String),
    Created(TodoResponse),
    Updated(TodoResponse),
    Deleted(i64),
    EditRequested(TodoResponse),
    EditCancelled,
    FilterChanged(Filter),
}

/// The whole client state. Transitions happen only through `reduce`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientState {
    pub todos: Vec<TodoResponse>,
    pub filter: Filter,
    pub view: ViewState,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            filter: Filter::All,
            view: ViewState::Idle,
        }
    }
}

impl ClientState {
    /// Todos visible under the current filter.
    pub fn visible_todos(&self) -> Vec<&TodoResponse> {
        self.todos
            .iter()
            .filter(|t| match self.filter {
                Filter::All => true,
                Filter::Completed => t.completed,
                Filter::Pending => !t.completed,
            })
            .collect()
    }
}

/// Pure reducer: consumes the previous state and one event, returns the
/// next state. Failures keep the list untouched (the view logs and no-ops).
pub fn reduce(mut state: ClientState, event: Event) -> ClientState {
    match event {
        Event::FetchStarted => {
            state.view = ViewState::Loading;
        }
        Event::FetchSucceeded(todos) => {
            state.todos = todos;
            state.view = ViewState::Idle;
        }
        Event::FetchFailed(message) => {
            state.view = ViewState::Error(message);
        }
        Event::Created(todo) => {
            // New todos go on top, matching the list's newest-first order
            state.todos.insert(0, todo);
            state.view = ViewState::Idle;
        }
        Event::Updated(todo) => {
            if let Some(existing) = state.todos.iter_mut().find(|t| t.id == todo.id) {
                *existing = todo;
            }
            state.view = ViewState::Idle;
        }
        Event::Deleted(id) => {
            state.todos.retain(|t| t.id != id);
            state.view = ViewState::Idle;
        }
        Event::EditRequested(todo) => {
            state.view = ViewState::Editing(Box::new(todo));
        }
        Event::EditCancelled => {
            state.view = ViewState::Idle;
        }
        Event::FilterChanged(filter) => {
            state.filter = filter;
        }
    }

    state
}
