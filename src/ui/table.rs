//! Record listing
//! One striped row per record, in store order, with Edit/Delete actions
use iced::font::{self, Font};
use iced::widget::{button, container, row, text, Column, Row};
use iced::{Alignment, Element, Length, Theme};

use crate::state::data::Record;
use crate::state::panel::PanelMessage;
use crate::state::store::RecordStore;
use crate::Message;

/// Width reserved for the Edit/Delete buttons
const ACTIONS_WIDTH: f32 = 150.0;

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Build the table for one store.
///
/// Row buttons carry the record's id, wrapped into an app message by `wrap`.
pub fn view<'a, R: Record>(
    store: &'a RecordStore<R>,
    wrap: fn(PanelMessage<R::Field>) -> Message,
) -> Element<'a, Message> {
    let header = R::FIELDS
        .iter()
        .fold(Row::new(), |header, &field| {
            header.push(cell(text(R::label(field)).font(BOLD).size(15)))
        })
        .push(container(text("Actions").font(BOLD).size(15)).width(ACTIONS_WIDTH))
        .spacing(10)
        .padding(8);

    let mut rows = Column::new().push(
        container(header)
            .width(Length::Fill)
            .style(container::rounded_box),
    );

    if store.is_empty() {
        rows = rows.push(
            container(text(format!("No {}s yet.", R::KIND)).size(14))
                .padding(8)
                .width(Length::Fill),
        );
    }

    for (index, (id, record)) in store.iter().enumerate() {
        let actions = row![
            button(text("Edit").size(14))
                .on_press(wrap(PanelMessage::OpenEdit(id)))
                .style(button::secondary),
            button(text("Delete").size(14))
                .on_press(wrap(PanelMessage::Delete(id)))
                .style(button::danger),
        ]
        .spacing(6)
        .width(ACTIONS_WIDTH);

        let line = R::FIELDS
            .iter()
            .fold(Row::new(), |line, &field| {
                line.push(cell(text(record.value(field)).size(14)))
            })
            .push(actions)
            .spacing(10)
            .padding(8)
            .align_y(Alignment::Center);

        rows = rows.push(
            container(line)
                .width(Length::Fill)
                .style(move |theme| stripe(theme, index)),
        );
    }

    rows.width(Length::Fill).into()
}

fn cell<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content).width(Length::FillPortion(1)).into()
}

// Alternate row backgrounds, starting with the weak shade
fn stripe(theme: &Theme, index: usize) -> container::Style {
    let palette = theme.extended_palette();
    let color = if index % 2 == 0 {
        palette.background.weak.color
    } else {
        palette.background.base.color
    };

    container::Style {
        background: Some(color.into()),
        ..container::Style::default()
    }
}
