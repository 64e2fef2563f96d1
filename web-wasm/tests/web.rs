//! ブラウザ上で実行するテスト（wasm-pack test --headless）

use portfolio_common::{filter_owned, Action, Portfolio, Selection, UiState};
use portfolio_wasm::app::apply_action;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn search_then_open_details() {
    let portfolio = Portfolio::builtin();
    let mut state = UiState::new();

    apply_action(&mut state, Action::SetQuery("REACT".into()));
    let visible = filter_owned(&portfolio.projects, &state.query);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title(), "Library Interactive App");

    apply_action(&mut state, Action::Select(visible[0].clone()));
    assert!(state.selection.is_open());

    apply_action(&mut state, Action::Dismiss);
    assert_eq!(state.selection, Selection::Closed);
}
