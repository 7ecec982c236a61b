//! Codegen fragments: pure functions producing one block of JSX source for
//! one concern (form inputs, table columns, action buttons, field displays,
//! metric calculations).
//!
//! Fragments encode every value for the literal context it lands in but do
//! no validation; they only see resolved view configurations.

mod actions;
mod columns;
mod display;
mod forms;
mod metrics;

pub use actions::{create_button, detail_actions, guard, table_actions};
pub use columns::{columns_config, filter_bar, search_box, search_match, sort_field};
pub use display::{card_content, event_class, event_content, field_displays, modal_content, value_display};
pub use forms::{
    edit_mode_effect, edit_mode_setup, field_components, initial_form_state, redirect_target,
    submit_logic, validation_rules,
};
pub use metrics::{dashboard_widgets, metric_calculations, metric_widgets};

/// Variable holding the record a block renders.
pub const RECORD: &str = "record";

/// Text shown for an empty value.
const EMPTY: &str = "\"—\"";
