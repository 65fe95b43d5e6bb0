//! The submission workflow as a pure reducer.
//!
//! Every user interaction and every asynchronous outcome arrives as an
//! [`Action`]; applying it mutates the [`FlowState`] and returns the
//! [`Effect`]s the caller must run (open a dialog, query the device,
//! post the report, show an alert). Keeping this free of any UI or IO
//! lets every abort path be asserted in plain tests.

use crate::device::{Capability, DeviceError};
use crate::models::{Coordinates, Page, PhotoSource, Report};
use crate::upload::UploadOutcome;

/// Everything the flow keeps between user actions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowState {
    pub page: Page,
    /// Local path or `file://` URI of the attached photo.
    pub photo: Option<String>,
    pub description: String,
    pub position: Option<Coordinates>,
    /// True while exactly one upload is pending.
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    EnterPressed,
    AttachPressed,
    /// Outcome of the Camera/Gallery chooser; `None` means dismissed.
    SourceChosen(Option<PhotoSource>),
    /// Outcome of a photo pick; `Ok(None)` means the user cancelled.
    PhotoResolved(Result<Option<String>, DeviceError>),
    DescriptionChanged(String),
    LocationPressed,
    PositionResolved(Result<Coordinates, DeviceError>),
    SubmitPressed,
    UploadResolved(UploadOutcome),
}

/// Work the caller must perform after an [`Action`] was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show the blocking Camera-vs-Gallery choice dialog.
    PromptSource,
    PickPhoto(PhotoSource),
    QueryPosition,
    Upload(Report),
    Notify(Alert),
}

/// A modal alert shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    PermissionRequired(Capability),
    DeviceUnavailable(String),
    Incomplete,
    Submitted,
    Rejected,
    TransportFailed,
}

impl Alert {
    pub fn title(&self) -> &'static str {
        match self {
            Alert::PermissionRequired(_) => "Permission Required",
            Alert::Incomplete => "Incomplete Details",
            Alert::Submitted => "Thank You",
            Alert::DeviceUnavailable(_) | Alert::Rejected | Alert::TransportFailed => "Error",
        }
    }

    pub fn body(&self) -> String {
        match self {
            Alert::PermissionRequired(capability) => {
                format!("{} access is required!", capability.label())
            }
            Alert::DeviceUnavailable(reason) => reason.clone(),
            Alert::Incomplete => "Please fill all fields before submitting.".to_string(),
            Alert::Submitted => "Report details are uploaded to the system.".to_string(),
            Alert::Rejected => "Failed to upload details. Please try again.".to_string(),
            Alert::TransportFailed => "An error occurred. Please try again later.".to_string(),
        }
    }
}

impl From<DeviceError> for Alert {
    fn from(err: DeviceError) -> Self {
        match err {
            DeviceError::PermissionDenied(capability) => Alert::PermissionRequired(capability),
            DeviceError::Unavailable(reason) => Alert::DeviceUnavailable(reason),
        }
    }
}

impl FlowState {
    /// Apply one action and return the effects the caller must run.
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::EnterPressed => {
                self.page = Page::Main;
                vec![]
            }
            Action::AttachPressed => vec![Effect::PromptSource],
            Action::SourceChosen(Some(source)) => vec![Effect::PickPhoto(source)],
            Action::SourceChosen(None) => vec![],
            Action::PhotoResolved(Ok(Some(uri))) => {
                self.photo = Some(uri);
                vec![]
            }
            // User cancelled the picker; keep whatever was attached.
            Action::PhotoResolved(Ok(None)) => vec![],
            Action::PhotoResolved(Err(err)) => vec![Effect::Notify(Alert::from(err))],
            Action::DescriptionChanged(text) => {
                self.description = text;
                vec![]
            }
            Action::LocationPressed => vec![Effect::QueryPosition],
            Action::PositionResolved(Ok(fix)) => {
                self.position = Some(fix);
                vec![]
            }
            Action::PositionResolved(Err(err)) => vec![Effect::Notify(Alert::from(err))],
            Action::SubmitPressed => self.begin_submit(),
            Action::UploadResolved(outcome) => self.finish_submit(outcome),
        }
    }

    fn begin_submit(&mut self) -> Vec<Effect> {
        // Duplicate tap while a post is in flight.
        if self.submitting {
            return vec![];
        }

        let (Some(photo), Some(position)) = (&self.photo, self.position) else {
            return vec![Effect::Notify(Alert::Incomplete)];
        };
        if self.description.is_empty() {
            return vec![Effect::Notify(Alert::Incomplete)];
        }

        let report = Report {
            photo: photo.clone(),
            description: self.description.clone(),
            position,
        };
        self.submitting = true;
        vec![Effect::Upload(report)]
    }

    fn finish_submit(&mut self, outcome: UploadOutcome) -> Vec<Effect> {
        self.submitting = false;
        match outcome {
            UploadOutcome::Accepted => {
                self.photo = None;
                self.description.clear();
                self.position = None;
                vec![Effect::Notify(Alert::Submitted)]
            }
            // The draft is kept so the user can retry.
            UploadOutcome::Rejected(_) => vec![Effect::Notify(Alert::Rejected)],
            UploadOutcome::Failed(_) => vec![Effect::Notify(Alert::TransportFailed)],
        }
    }
}
