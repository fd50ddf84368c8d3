use std::fmt;

/// Pages inside an LPA, reached at `/lpa/{id}{path}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Path {
    CanYouSignYourLpa,
    ChooseAttorneys,
    ChooseAttorneysSummary,
    ChoosePeopleToNotify,
    ChoosePeopleToNotifySummary,
    ChooseReplacementAttorneys,
    ChooseReplacementAttorneysSummary,
    MakeANewLpa,
    TaskList,
    WeHaveUpdatedYourDetails,
}

impl Path {
    pub fn as_str(&self) -> &'static str {
        use Path::*;
        match *self {
            CanYouSignYourLpa => "/can-you-sign-your-lpa",
            ChooseAttorneys => "/choose-attorneys",
            ChooseAttorneysSummary => "/choose-attorneys-summary",
            ChoosePeopleToNotify => "/choose-people-to-notify",
            ChoosePeopleToNotifySummary => "/choose-people-to-notify-summary",
            ChooseReplacementAttorneys => "/choose-replacement-attorneys",
            ChooseReplacementAttorneysSummary => "/choose-replacement-attorneys-summary",
            MakeANewLpa => "/make-a-new-lpa",
            TaskList => "/task-list",
            WeHaveUpdatedYourDetails => "/we-have-updated-your-details",
        }
    }

    pub fn format(&self, lpa_id: &str) -> String {
        format!("/lpa/{}{}", lpa_id, self.as_str())
    }

    /// Where to go after this page: `from` when it stays within the same
    /// LPA, otherwise this path.
    pub fn redirect_target(&self, lpa_id: &str, from: &str) -> String {
        if is_within_lpa(lpa_id, from) {
            from.to_string()
        } else {
            self.format(lpa_id)
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/lpa/{{id}}{}", self.as_str())
    }
}

fn is_within_lpa(lpa_id: &str, from: &str) -> bool {
    if lpa_id.is_empty() || from.chars().any(char::is_control) {
        return false;
    }

    let prefix = format!("/lpa/{}", lpa_id);
    match from.strip_prefix(&prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
        None => false,
    }
}
