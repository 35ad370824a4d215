use crate::assets::{PROJECT_PIC_1, PROJECT_PIC_2, PROJECT_PIC_3, PROJECT_PIC_4};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub github: &'static str,
    image: &'static str,
}

impl Project {
    /// Site-relative URL of the bundled image.
    pub fn image_src(&self) -> String {
        format!("/assets/{}", self.image)
    }

    /// File name of the image under the assets directory.
    pub fn image_name(&self) -> &'static str {
        self.image
    }
}

/// Display order is the order of this array.
pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "Weather App",
        description: "The weather app shows daily conditions, a 7-day forecast, and an 8-day hourly breakdown,
            all powered by a reliable API and featuring a sleek dark mode.",
        link: "https://ddelportgit.github.io/weather-app-4/",
        github: "https://github.com/ddelportgit/weather-app-4",
        image: PROJECT_PIC_1,
    },
    Project {
        id: 2,
        title: "Bible App",
        description: "Explore the Bible with our API-driven app, where you can choose a version, navigate
            through books and chapters, and copy verses with a single click.",
        link: "https://ddelportgit.github.io/bible-app-1/",
        github: "https://github.com/ddelportgit/bible-app-1",
        image: PROJECT_PIC_2,
    },
    Project {
        id: 3,
        title: "Tic-Tac-Toe Game",
        description: "Enjoy our Tic Tac Toe game featuring a theme changer for a personalized look and a modal
            with easy-to-follow instructions for seamless gameplay.",
        link: "https://ddelportgit.github.io/tictactoe-game-1/",
        github: "https://github.com/ddelportgit/tictactoe-game-1",
        image: PROJECT_PIC_3,
    },
    Project {
        id: 4,
        title: "Password Generator",
        description: "Generate secure passwords with our random password generator, featuring customizable
            options and a user-friendly interface for enhanced security.",
        link: "https://ddelportgit.github.io/password-generator-1/",
        github: "https://github.com/ddelportgit/password-generator-1",
        image: PROJECT_PIC_4,
    },
];

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn find(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::assets::PROJECT_IMAGES;

    #[test]
    fn test_ids_unique_and_ordered() {
        let ids = projects().iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let unique = ids.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), projects().len());
    }

    #[test]
    fn test_find_tic_tac_toe() {
        let project = find(3).expect("project 3 should exist");
        assert_eq!(project.title, "Tic-Tac-Toe Game");
        assert_eq!(project.link, "https://ddelportgit.github.io/tictactoe-game-1/");
        assert_eq!(
            project.github,
            "https://github.com/ddelportgit/tictactoe-game-1"
        );
    }

    #[test]
    fn test_find_unknown_id() {
        assert!(find(0).is_none());
        assert!(find(5).is_none());
    }

    #[test]
    fn test_images_are_checked_assets() {
        for project in projects() {
            assert!(PROJECT_IMAGES.contains(&project.image_name()));
            assert_eq!(
                project.image_src(),
                format!("/assets/{}", project.image_name())
            );
        }
        let distinct = projects()
            .iter()
            .map(|p| p.image_name())
            .collect::<HashSet<_>>();
        assert_eq!(distinct.len(), PROJECT_IMAGES.len());
    }

    #[test]
    fn test_links_are_absolute() {
        for project in projects() {
            assert!(project.link.starts_with("https://"));
            assert!(project.github.starts_with("https://github.com/"));
            assert!(!project.description.is_empty());
        }
    }
}
