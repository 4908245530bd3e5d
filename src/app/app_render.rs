use ratatui::Frame;

use super::app_state::App;
use crate::chrome::{header_render, hint_line_render};
use crate::editor::editor_render;
use crate::layout::LayoutRegions;
use crate::notification::render_notification;
use crate::search::overlay_render;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let theme = self.theme();
        let dialog_open = self.session.editor.is_dialog_open();
        self.layout_regions = LayoutRegions::compute(frame.area(), dialog_open);
        let regions = self.layout_regions.clone();

        if let Some(area) = regions.header {
            header_render::render_header(self.file_path.as_deref(), &theme, frame, area);
        }

        if let Some(area) = regions.editor_pane {
            editor_render::render_buffer(&mut self.session.editor, &theme, frame, area);
        }

        if let Some(area) = regions.dialog_bar {
            let session = &mut self.session;
            editor_render::render_dialog(
                &mut session.editor,
                &mut session.surface,
                &theme,
                frame,
                area,
            );
        }

        if let Some(area) = regions.hint_line {
            hint_line_render::render_line(dialog_open, &theme, frame, area);
        }

        // Floating parts last so they paint over the buffer
        overlay_render::render_panel(&self.session.overlay, &mut self.session.surface, frame);

        if let Some(area) = regions.editor_pane {
            render_notification(frame, &mut self.notification, area);
        }
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
