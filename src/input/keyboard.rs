//! Application-level key bindings

use bevy::prelude::*;

/// Esc closes the application
pub fn exit_on_escape(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("[INPUT] Escape pressed, exiting");
        exit.write(AppExit::Success);
    }
}
