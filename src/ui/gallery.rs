use iced::widget::{button, column, container, image, mouse_area, row, scrollable, text};
use iced::{Alignment, Border, Color, ContentFit, Element, Length, Rectangle, Theme};
use iced_aw::Wrap;

use crate::app::Message;
use crate::locale::Labels;
use crate::state::session::Session;

/// Header hides once the gallery is scrolled past this many logical pixels
pub const HEADER_HIDE_OFFSET: f32 = 50.0;

/// Border that marks the selected tile
fn tile_style(theme: &Theme, selected: bool) -> container::Style {
    let palette = theme.extended_palette();
    let (color, width) = if selected {
        (palette.primary.strong.color, 3.0)
    } else {
        (palette.background.strong.color, 1.0)
    };

    container::Style {
        border: Border {
            color,
            width,
            radius: 6.0.into(),
        },
        ..container::Style::default()
    }
}

fn delete_button<'a>(index: usize) -> iced::widget::Button<'a, Message> {
    button(text("×")).on_press(Message::Remove(index)).padding([2, 8])
}

/// One gallery tile. Non-image entries keep their slot but cannot be selected.
fn tile<'a>(session: &'a Session, index: usize, size: f32) -> Element<'a, Message> {
    let Some(entry) = session.files().get(index) else {
        return column![].into();
    };
    let selection = session.selection();
    let is_selected = selection.selected() == Some(index);
    let is_zoomed = selection.zoomed() == Some(index);

    let Some(preview) = session.preview(index) else {
        return container(column![text(entry.name()).size(12), delete_button(index)].spacing(6))
            .width(size)
            .padding(6)
            .style(container::bordered_box)
            .into();
    };

    let picture = mouse_area(
        image(preview.handle().clone())
            .width(size)
            .height(size)
            .content_fit(ContentFit::Cover),
    )
    .on_press(Message::SelectToggle(index));

    let mut controls = row![delete_button(index)].spacing(6);
    if !is_zoomed {
        controls = controls.push(
            button(text("+"))
                .on_press(Message::ZoomToggle(index))
                .padding([2, 8]),
        );
    }

    container(column![picture, controls].spacing(6).align_x(Alignment::Center))
        .padding(4)
        .style(move |theme: &Theme| tile_style(theme, is_selected))
        .into()
}

/// The collection screen: header, tile grid and the upload/action section
pub fn view<'a>(
    session: &'a Session,
    labels: &'static Labels,
    thumbnail_size: f32,
    header_visible: bool,
) -> Element<'a, Message> {
    let header = text(labels.title).size(40).color(if header_visible {
        Color::WHITE
    } else {
        Color::TRANSPARENT
    });

    let tiles: Vec<Element<'a, Message>> = (0..session.files().len())
        .map(|index| tile(session, index, thumbnail_size))
        .collect();
    let grid = Wrap::with_elements(tiles).spacing(12.0).line_spacing(12.0);

    let has_selection = session.selected().is_some();
    let actions = row![
        button(text(labels.view_solution))
            .on_press_maybe(has_selection.then_some(Message::ViewSolution))
            .padding(10),
        button(text(labels.solve))
            .on_press_maybe(has_selection.then_some(Message::CheckSolution))
            .padding(10),
    ]
    .spacing(12);

    let upload = column![
        text(labels.add_task).size(24),
        button(text(labels.choose_files))
            .on_press(Message::PickFiles)
            .padding(10),
        actions,
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    let body = scrollable(
        column![grid, upload]
            .spacing(24)
            .padding(20)
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset().y))
    .width(Length::Fill)
    .height(Length::Fill);

    column![header, body]
        .spacing(12)
        .padding(20)
        .align_x(Alignment::Center)
        .into()
}

/// The enlarged view of the zoomed entry, laid out inside `region`.
///
/// Clicking the picture still toggles selection; any press outside the
/// wrapper collapses the zoom.
pub fn zoomed<'a>(session: &'a Session, index: usize, region: Rectangle) -> Element<'a, Message> {
    let is_selected = session.selected() == Some(index);

    let content: Element<'a, Message> = match session.preview(index) {
        Some(preview) => mouse_area(
            image(preview.handle().clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain),
        )
        .on_press(Message::SelectToggle(index))
        .into(),
        None => text(
            session
                .files()
                .get(index)
                .map(|entry| entry.name())
                .unwrap_or_default(),
        )
        .into(),
    };

    let wrapper = container(
        column![content, delete_button(index)]
            .spacing(8)
            .align_x(Alignment::Center),
    )
    .width(region.width)
    .height(region.height)
    .padding(8)
    .style(move |theme: &Theme| tile_style(theme, is_selected));

    container(wrapper)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
