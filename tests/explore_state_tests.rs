//! Integration tests for the Explore reducer through the store.
//!
//! Each case follows the same shape: given an initial state, dispatch one
//! action, compare the whole resulting state against the expected value.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use dashexplore::app::explore::state::{
        ExploreAction, ExploreId, ExploreItemState, ExploreState,
    };
    use dashexplore::app::explore::store::ExploreStore;

    fn pane(container_width: u32) -> ExploreItemState {
        ExploreItemState {
            container_width,
            ..Default::default()
        }
    }

    /// Dispatch one action against the given state and return the result
    fn reduce_via_store(initial: ExploreState, action: ExploreAction) -> ExploreState {
        let store = ExploreStore::new(initial);
        store.dispatch(action);
        store.state()
    }

    #[test]
    fn test_split_close_left_moves_right_pane_to_left() {
        let left_item = pane(100);
        let right_item = pane(200);
        let initial = ExploreState::with_panes(left_item, right_item.clone());

        let result = reduce_via_store(initial, ExploreAction::SplitClose(ExploreId::Left));

        let mut expected = ExploreState::with_left(right_item);
        expected.even_split_panes = true;
        expected.larger_explore_id = None;
        expected.maxed_explore_id = None;
        expected.synced_times = false;
        assert_eq!(result, expected);
    }

    #[test]
    fn test_split_close_right_resets_to_left_pane() {
        let left_item = pane(100);
        let right_item = pane(200);
        let initial = ExploreState::with_panes(left_item.clone(), right_item);

        let result = reduce_via_store(initial, ExploreAction::SplitClose(ExploreId::Right));

        let mut expected = ExploreState::with_left(left_item);
        expected.even_split_panes = true;
        expected.larger_explore_id = None;
        expected.maxed_explore_id = None;
        expected.synced_times = false;
        assert_eq!(result, expected);
    }

    #[test]
    fn test_split_close_unsyncs_time_ranges() {
        let item = pane(100);
        let mut initial = ExploreState::with_panes(item.clone(), item.clone());
        initial.synced_times = true;

        let result = reduce_via_store(initial, ExploreAction::SplitClose(ExploreId::Right));

        let mut expected = ExploreState::with_left(item);
        expected.even_split_panes = true;
        expected.synced_times = false;
        assert_eq!(result, expected);
    }

    #[test]
    fn test_split_open_then_close_returns_to_single_pane() {
        let store = ExploreStore::new(ExploreState::with_left(pane(500)));

        store.dispatch(ExploreAction::SplitOpen { item: None });
        assert!(store.state().is_split());

        store.dispatch(ExploreAction::SplitClose(ExploreId::Right));
        let state = store.state();
        assert!(!state.is_split());
        assert_eq!(state.pane(ExploreId::Left).unwrap().container_width, 500);
    }

    #[test]
    fn test_maximize_then_even_resize() {
        let store = ExploreStore::new(ExploreState::with_panes(pane(100), pane(200)));

        store.dispatch(ExploreAction::MaximizePane {
            explore_id: ExploreId::Left,
        });
        let maxed = store.state();
        assert_eq!(maxed.maxed_explore_id, Some(ExploreId::Left));
        assert_eq!(maxed.larger_explore_id, Some(ExploreId::Left));
        assert!(!maxed.even_split_panes);

        store.dispatch(ExploreAction::EvenPaneResize);
        let evened = store.state();
        assert!(evened.maxed_explore_id.is_none());
        assert!(evened.larger_explore_id.is_none());
        assert!(evened.even_split_panes);
    }

    #[test]
    fn test_split_size_update_clears_maximize_marker() {
        let store = ExploreStore::new(ExploreState::with_panes(pane(100), pane(200)));
        store.dispatch(ExploreAction::MaximizePane {
            explore_id: ExploreId::Right,
        });

        store.dispatch(ExploreAction::SplitSizeUpdate {
            larger_explore_id: Some(ExploreId::Right),
        });

        let state = store.state();
        assert!(state.maxed_explore_id.is_none());
        assert_eq!(state.larger_explore_id, Some(ExploreId::Right));
        assert!(!state.even_split_panes);
    }

    #[test]
    fn test_sync_times_only_changes_flag() {
        let initial = ExploreState::with_panes(pane(100), pane(200));

        let result = reduce_via_store(
            initial.clone(),
            ExploreAction::SyncTimes { synced_times: true },
        );

        let mut expected = initial;
        expected.synced_times = true;
        assert_eq!(result, expected);
    }
}
