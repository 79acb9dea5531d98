//! Landing page.
//! Used by: server.

use crate::view::ViewState;

pub async fn index() -> ViewState {
    ViewState::empty()
}
