use iced::widget::{button, column, image, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::app::Message;
use crate::locale::Labels;
use crate::state::handoff::{Handoff, Viewer};

fn heading(viewer: Viewer, labels: &'static Labels) -> &'static str {
    match viewer {
        Viewer::Solution => labels.solution_heading,
        Viewer::CheckSolution => labels.check_heading,
    }
}

/// Renders whatever reference it was handed. No validation, no fallback.
pub fn view<'a>(handoff: &'a Handoff, labels: &'static Labels) -> Element<'a, Message> {
    column![
        button(text(labels.back)).on_press(Message::Back).padding(10),
        text(heading(handoff.viewer(), labels)).size(36),
        image(handoff.reference().handle().clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain),
    ]
    .spacing(16)
    .padding(24)
    .align_x(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn test_headings() {
        let labels = Locale::Ru.labels();
        assert_eq!(heading(Viewer::Solution, labels), "Решение");
        assert_eq!(heading(Viewer::CheckSolution, labels), "Проверка решения");
    }
}
