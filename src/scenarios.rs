//! Built-in restriction scenarios.
//!
//! Each scenario probes one family of disabled APIs and signals
//! completion through the harness. Probes run in declaration order;
//! scenarios are independent and order-insensitive.

use crate::env::{
    AccessPath, BarAccess, BlockedEvent, ChromeBar, DocumentMethod, DocumentProperty,
    HistoryMethod, HistoryProperty, RegistrationMechanism, WindowMethod,
};
use crate::runner::{Expectation, Scenario, ScenarioCx};

/// The full built-in suite, in registration order.
pub fn builtin_suite() -> Vec<Scenario> {
    vec![
        Scenario { name: "document_mutation", run: document_mutation },
        Scenario { name: "history_navigation", run: history_navigation },
        Scenario { name: "window_find", run: window_find },
        Scenario { name: "window_alert", run: window_alert },
        Scenario { name: "window_confirm", run: window_confirm },
        Scenario { name: "window_prompt", run: window_prompt },
        Scenario { name: "chrome_bars", run: chrome_bars },
        Scenario { name: "blocked_events", run: blocked_events },
        Scenario { name: "sync_xhr", run: sync_xhr },
    ]
}

fn document_mutation(cx: &ScenarioCx<'_>) {
    for method in DocumentMethod::ALL {
        cx.assert_throws_error(|| cx.env.document_call(method), cx.expect_unavailable());
    }
    for property in DocumentProperty::ALL {
        cx.assert_throws_error(|| cx.env.document_read(property), cx.expect_unavailable());
    }
    cx.harness.succeed();
}

fn history_navigation(cx: &ScenarioCx<'_>) {
    for method in HistoryMethod::ALL {
        cx.assert_throws_error(|| cx.env.history_call(method), cx.expect_unavailable());
    }
    for property in HistoryProperty::ALL {
        cx.assert_throws_error(|| cx.env.history_read(property), cx.expect_unavailable());
    }
    cx.harness.succeed();
}

/// Probe a window method through every syntactic access path.
fn window_method(cx: &ScenarioCx<'_>, method: WindowMethod) {
    for path in AccessPath::ALL {
        cx.assert_throws_error(|| cx.env.window_call(method, path), cx.expect_unavailable());
    }
    cx.harness.succeed();
}

fn window_find(cx: &ScenarioCx<'_>) {
    window_method(cx, WindowMethod::Find);
}

fn window_alert(cx: &ScenarioCx<'_>) {
    window_method(cx, WindowMethod::Alert);
}

fn window_confirm(cx: &ScenarioCx<'_>) {
    window_method(cx, WindowMethod::Confirm);
}

fn window_prompt(cx: &ScenarioCx<'_>) {
    window_method(cx, WindowMethod::Prompt);
}

fn chrome_bars(cx: &ScenarioCx<'_>) {
    for bar in ChromeBar::ALL {
        for access in BarAccess::ALL {
            cx.assert_throws_error(|| cx.env.bar_visible(bar, access), cx.expect_unavailable());
        }
    }
    cx.harness.succeed();
}

fn blocked_events(cx: &ScenarioCx<'_>) {
    for event in BlockedEvent::ALL {
        for mechanism in RegistrationMechanism::ALL {
            // The handler must never run; a dispatch is its own failure.
            let mut handler = || cx.harness.fail("event handled");
            cx.assert_throws_error(
                || cx.env.register_event(event, mechanism, &mut handler),
                cx.expect_unavailable(),
            );
        }
    }
    cx.harness.succeed();
}

fn sync_xhr(cx: &ScenarioCx<'_>) {
    cx.assert_throws_error(
        || cx.env.open_xhr("GET", "data:should not load", true),
        Expectation::Equals(cx.policy.sync_xhr_message.clone()),
    );
    cx.harness.succeed();
}
