use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, image, text, text_input},
};
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use crate::device::{DeviceError, desktop};
use crate::flow::{Action, Alert, Effect};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};
use crate::models::{Coordinates, PhotoSource};
use crate::upload::{UploadOutcome, submit_report};

/// Main submission screen: photo, description, location, submit.
#[derive(Debug, Clone, Default)]
pub struct ReportScreen;

#[derive(Debug, Clone)]
pub enum ReportMessage {
    AttachPressed,
    SourceChosen(Option<PhotoSource>),
    PhotoPicked(Result<Option<String>, DeviceError>),
    DescriptionChanged(String),
    LocationPressed,
    PositionFixed(Result<Coordinates, DeviceError>),
    SubmitPressed,
    UploadFinished(UploadOutcome),
    AlertClosed,
}

impl Screen for ReportScreen {
    type Message = ReportMessage;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let flow = &state.flow;

        let header = container(text("Fieldpost").size(18))
            .padding(20)
            .width(iced::Length::Fill)
            .align_x(Center);

        let mut body = column![
            button("Upload Image")
                .on_press(ScreenMessage::ScreenMessage(ReportMessage::AttachPressed)),
        ]
        .spacing(10)
        .padding(20);

        if let Some(photo) = &flow.photo {
            body = body.push(
                image(image::Handle::from_path(photo))
                    .width(200.0)
                    .height(200.0),
            );
        }

        body = body.push(
            text_input("Add Description", &flow.description)
                .on_input(|value| {
                    ScreenMessage::ScreenMessage(ReportMessage::DescriptionChanged(value))
                })
                .padding(10),
        );
        body = body.push(
            button("Add Location Details")
                .on_press(ScreenMessage::ScreenMessage(ReportMessage::LocationPressed)),
        );
        if let Some(position) = flow.position {
            body = body.push(text(format!(
                "Latitude: {}, Longitude: {}",
                position.latitude, position.longitude
            )));
        }

        let submit_label = if flow.submitting { "Submitting..." } else { "Submit" };
        let submit = button(submit_label)
            .on_press_maybe(
                (!flow.submitting)
                    .then_some(ScreenMessage::ScreenMessage(ReportMessage::SubmitPressed)),
            )
            .width(iced::Length::Fill);

        column![header, container(body).height(iced::Length::Fill), submit].into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        let action = match message {
            ReportMessage::AttachPressed => Action::AttachPressed,
            ReportMessage::SourceChosen(source) => Action::SourceChosen(source),
            ReportMessage::PhotoPicked(result) => Action::PhotoResolved(result),
            ReportMessage::DescriptionChanged(value) => Action::DescriptionChanged(value),
            ReportMessage::LocationPressed => Action::LocationPressed,
            ReportMessage::PositionFixed(result) => Action::PositionResolved(result),
            ReportMessage::SubmitPressed => Action::SubmitPressed,
            ReportMessage::UploadFinished(outcome) => Action::UploadResolved(outcome),
            ReportMessage::AlertClosed => return Task::none(),
        };

        let effects = state.flow.apply(action);
        Task::batch(effects.into_iter().map(|effect| run_effect(effect, state)))
    }
}

fn run_effect(effect: Effect, state: &AppState) -> Task<ScreenMessage<ReportScreen>> {
    match effect {
        Effect::PromptSource => Task::perform(prompt_source(), |source| {
            ScreenMessage::ScreenMessage(ReportMessage::SourceChosen(source))
        }),
        Effect::PickPhoto(source) => Task::perform(desktop::pick_photo(source), |result| {
            ScreenMessage::ScreenMessage(ReportMessage::PhotoPicked(result))
        }),
        Effect::QueryPosition => Task::perform(
            desktop::current_position(state.config.position),
            |result| ScreenMessage::ScreenMessage(ReportMessage::PositionFixed(result)),
        ),
        Effect::Upload(report) => {
            let client = state.client.clone();
            let endpoint = state.config.endpoint.clone();
            Task::perform(submit_report(client, endpoint, report), |outcome| {
                ScreenMessage::ScreenMessage(ReportMessage::UploadFinished(outcome))
            })
        }
        Effect::Notify(alert) => Task::perform(show_alert(alert), |_| {
            ScreenMessage::ScreenMessage(ReportMessage::AlertClosed)
        }),
    }
}

async fn prompt_source() -> Option<PhotoSource> {
    let choice = AsyncMessageDialog::new()
        .set_title("Upload Image")
        .set_description("Choose an option")
        .set_buttons(MessageButtons::YesNoCancelCustom(
            "Camera".to_string(),
            "Gallery".to_string(),
            "Cancel".to_string(),
        ))
        .show()
        .await;

    // Backends differ in whether custom buttons come back as labels
    // or as the underlying Yes/No results.
    match choice {
        MessageDialogResult::Custom(label) if label == "Camera" => Some(PhotoSource::Camera),
        MessageDialogResult::Custom(label) if label == "Gallery" => Some(PhotoSource::Gallery),
        MessageDialogResult::Yes => Some(PhotoSource::Camera),
        MessageDialogResult::No => Some(PhotoSource::Gallery),
        _ => None,
    }
}

async fn show_alert(alert: Alert) {
    let level = match alert {
        Alert::Submitted => MessageLevel::Info,
        Alert::Incomplete | Alert::PermissionRequired(_) => MessageLevel::Warning,
        _ => MessageLevel::Error,
    };
    AsyncMessageDialog::new()
        .set_title(alert.title())
        .set_description(alert.body())
        .set_level(level)
        .show()
        .await;
}
