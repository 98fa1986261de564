/// Folder name paired with the files declared beneath it.
type FolderEntry = (&'static str, &'static [&'static str]);

const WORKOUT_APP: &[FolderEntry] = &[(
    "lib",
    &[
        "app.dart",
        "main.dart",
        "core/theme/app_colors.dart",
        "core/utils/constants.dart",
        "features/home/home_screen.dart",
        "features/home/home_controller.dart",
        "features/workouts/workout_editor_screen.dart",
        "features/workouts/workout_model.dart",
        "features/workouts/interval_model.dart",
        "features/workouts/workout_controller.dart",
        "features/tracking/tracking_service.dart",
        "features/audio/audio_coach.dart",
        "features/payments/stripe_service.dart",
        "features/reminders/reminder_service.dart",
        "features/dashboard/dashboard_screen.dart",
        "features/dashboard/progress_chart.dart",
        "models/user_preferences.dart",
        "services/local_storage_service.dart",
        "services/firebase_service.dart",
        "services/notification_service.dart",
        "providers/global_providers.dart",
    ],
)];

/// Ordered declaration of folders and the relative file paths inside each one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LayoutSpec {
    folders: Vec<(String, Vec<String>)>,
}

impl LayoutSpec {
    /// The built-in skeleton for the workout app.
    pub fn workout_app() -> Self {
        Self::from_static(WORKOUT_APP)
    }

    fn from_static(entries: &[FolderEntry]) -> Self {
        let mut layout = Self::default();
        for (folder, files) in entries {
            layout = layout.folder(*folder, files.iter().copied());
        }
        layout
    }

    /// Append a folder with its files. Declaring the same folder twice appends
    /// to the existing list instead of starting a second one.
    pub fn folder<I, S>(mut self, name: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let files = files.into_iter().map(Into::into);
        match self.folders.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, list)) => list.extend(files),
            None => self.folders.push((name, files.collect())),
        }
        self
    }

    /// Every `(folder, file_path)` pair in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.folders.iter().flat_map(|(folder, files)| {
            files
                .iter()
                .map(move |file| (folder.as_str(), file.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.folders.iter().map(|(_, files)| files.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
