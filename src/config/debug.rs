//! Debug-build chatter switches. All usages sit behind
//! `#[cfg(debug_assertions)]` so release builds carry none of it.

pub struct DebugFlags {
    /// Log every form event the selection panel emits
    pub print_ui_interactions: bool,
    /// Log request URLs and response status codes
    pub print_http: bool,
}

pub static DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: false,
    print_http: true,
};
