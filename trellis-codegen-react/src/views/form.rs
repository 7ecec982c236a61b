use trellis_codegen::{resolve::ResolvedFormView, template::Substitution};

use crate::fragments;

pub(super) fn tokens(view: &ResolvedFormView<'_>, tokens: &mut Substitution) {
    let submit_label = if view.is_edit() {
        "Save changes".to_string()
    } else {
        format!("Create {}", view.entity.name)
    };

    tokens
        .set("INITIAL_FORM_STATE", fragments::initial_form_state(view))
        .set("VALIDATION_RULES", fragments::validation_rules(view))
        .set("FIELD_COMPONENTS", fragments::field_components(view))
        .set("EDIT_MODE_SETUP", fragments::edit_mode_setup(view))
        .set("EDIT_MODE_EFFECT", fragments::edit_mode_effect(view))
        .set("SUBMIT_LOGIC", fragments::submit_logic(view))
        .set("REDIRECT", fragments::redirect_target(view))
        .set("SUBMIT_LABEL", submit_label);
}
