use crate::api;
use crate::browser::RuntimeMessageListener;
use crate::pages::{Base, EditShell};
use dioxus::prelude::*;
use popup_common::{PopupNotification, TabDescriptor};
use popup_ui::{
    use_popup_config, CommandDispatcher, Loadable, NavigatorGroup, NowPlayingView, SongSnapshot,
};
use std::rc::Rc;
use tracing::{debug, warn};

fn refetches_tab(notification: &PopupNotification) -> bool {
    matches!(notification, PopupNotification::UpdateTab)
}

#[component]
pub fn Popup() -> Element {
    let platform = use_popup_config().platform;
    let dispatcher: CommandDispatcher = use_context();

    // Every resolution clears optimistic expectations, even when the
    // controller reports the same descriptor again
    let mut tab = use_resource({
        let dispatcher = dispatcher.clone();
        move || {
            let dispatcher = dispatcher.clone();
            async move { dispatcher.refreshed(api::fetch_active_tab().await) }
        }
    });
    let session = use_resource(api::fetch_session);
    let navigator = use_resource(move || api::mobile_navigator_group(platform));
    let is_editing = use_signal(|| false);

    // Held by the hook and dropped with the page, which removes the listener
    use_hook(move || {
        RuntimeMessageListener::new(move |notification| {
            if refetches_tab(&notification) {
                debug!("Active tab changed, refetching");
                tab.restart();
            }
        })
        .map_err(|e| warn!("Tab updates unavailable: {}", e))
        .ok()
        .map(Rc::new)
    });

    let tab_state: ReadSignal<Loadable<TabDescriptor>> =
        use_memo(move || Loadable::from(tab.cloned())).into();
    let song: ReadSignal<Option<SongSnapshot>> =
        use_memo(move || SongSnapshot::from_tab(tab_state.read().resolved())).into();
    let navigator_state: ReadSignal<Loadable<NavigatorGroup>> =
        use_memo(move || Loadable::from(navigator.cloned())).into();
    let session_name: ReadSignal<Option<String>> =
        use_memo(move || session.cloned().flatten().and_then(|s| s.session_name)).into();

    rsx! {
        NowPlayingView {
            tab: tab_state,
            navigator: navigator_state,
            session_name,
            dispatcher,
            is_editing,
            edit_view: rsx! {
                EditShell { song, is_editing }
            },
            placeholder: rsx! {
                Base {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_tab_updates_refetch() {
        assert!(refetches_tab(&PopupNotification::UpdateTab));
        assert!(!refetches_tab(&PopupNotification::Other));
    }
}
