use iced::widget::{
    button, column, container, horizontal_space, row, text, text_editor, text_input, Column,
};
use iced::{Alignment, Element, Theme};

use crate::state::data::Record;
use crate::state::form::FormState;
use crate::state::panel::PanelMessage;
use crate::state::session::Mode;
use crate::Message;

/// Width of the modal dialog
const DIALOG_WIDTH: f32 = 480.0;

/// Build the add/edit dialog for an open session.
///
/// Single-line fields are bound to `form`; a multi-line field is bound to
/// `editor`, whose actions are reported through `on_editor`.
pub fn view<'a, R: Record>(
    mode: Mode,
    form: &'a FormState<R>,
    editor: &'a text_editor::Content,
    wrap: fn(PanelMessage<R::Field>) -> Message,
    on_editor: fn(text_editor::Action) -> Message,
) -> Element<'a, Message> {
    let (title, submit_label) = match mode {
        Mode::Create => (format!("Add {}", R::TITLE), format!("Add {}", R::TITLE)),
        Mode::Edit(_) => (format!("Edit {}", R::TITLE), format!("Update {}", R::TITLE)),
    };

    let header = row![
        text(title).size(24),
        horizontal_space(),
        button(text("×").size(20))
            .on_press(wrap(PanelMessage::Cancel))
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    let fields = R::FIELDS
        .iter()
        .fold(Column::new().spacing(14), |fields, &field| {
            fields.push(field_view(form, field, editor, wrap, on_editor))
        });

    let submit = button(text(submit_label))
        .on_press(wrap(PanelMessage::Submit))
        .style(button::primary)
        .padding(10);

    container(column![header, fields, submit].spacing(20))
        .width(DIALOG_WIDTH)
        .padding(24)
        .style(container::rounded_box)
        .into()
}

fn field_view<'a, R: Record>(
    form: &'a FormState<R>,
    field: R::Field,
    editor: &'a text_editor::Content,
    wrap: fn(PanelMessage<R::Field>) -> Message,
    on_editor: fn(text_editor::Action) -> Message,
) -> Element<'a, Message> {
    let error = form.error(field);
    let invalid = error.is_some();

    let input: Element<'a, Message> = if R::is_multiline(field) {
        text_editor(editor)
            .on_action(on_editor)
            .height(120.0)
            .padding(8)
            .style(move |theme: &Theme, status| {
                let mut style = text_editor::default(theme, status);
                if invalid {
                    style.border.color = theme.palette().danger;
                }
                style
            })
            .into()
    } else {
        text_input(R::label(field), form.value(field))
            .on_input(move |value| wrap(PanelMessage::FieldChanged(field, value)))
            .on_submit(wrap(PanelMessage::Submit))
            .padding(8)
            .style(move |theme: &Theme, status| {
                let mut style = text_input::default(theme, status);
                if invalid {
                    style.border.color = theme.palette().danger;
                }
                style
            })
            .into()
    };

    let mut content = column![text(R::label(field)).size(14), input].spacing(6);
    if let Some(message) = error {
        content = content.push(text(message).size(13).style(text::danger));
    }

    content.into()
}
