use trellis_codegen::{resolve::ResolvedDetailView, template::Substitution};

use crate::fragments;

pub(super) fn tokens(view: &ResolvedDetailView<'_>, tokens: &mut Substitution) {
    tokens
        .set("ACTION_BUTTONS", fragments::detail_actions(view))
        .set(
            "FIELD_DISPLAYS",
            fragments::field_displays(&view.sections, view.entity),
        );
}
