use super::*;

#[tokio::test]
async fn test_state_starts_on_first_attendant() {
    let state = test_helpers::test_app_state();
    let board = state.board.read().await;
    assert_eq!(board.active_attendant(), "att-1");
    assert_eq!(board.columns().len(), 4);
}

#[tokio::test]
async fn clones_share_the_same_manager() {
    let state = test_helpers::test_app_state();
    let other = state.clone();

    state.board.write().await.add_column("Pós-venda").unwrap();
    assert_eq!(other.board.read().await.columns().len(), 5);
}

#[tokio::test]
async fn quick_replies_start_empty() {
    let state = test_helpers::test_app_state();
    assert!(state.quick_replies.read().await.list().is_empty());
}
