mod emit_decision_intents;
mod emit_push_and_delete_intents;
mod render_modification_record;
