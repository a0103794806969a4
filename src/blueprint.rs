//! The built-in Unity project layout.
//!
//! Script stubs live under `templates/` at the crate root and are embedded with [`include_str!`].
//! Their paths there mirror the path each one is written to, so moving a template means moving
//! its manifest entry too.

use crate::manifest::Manifest;

/// Feature modules, infrastructure services, UI, art, scenes and audio folders.
pub const DIRECTORIES: &[&str] = &[
    "Assets/Core/Scripts/Runtime",
    "Assets/Core/Scripts/Tests",
    "Assets/Core/Prefabs",
    "Assets/Features/Gameplay/Scripts/Runtime",
    "Assets/Features/Gameplay/Scripts/Tests",
    "Assets/Features/Gameplay/Prefabs",
    "Assets/Features/Turns/Scripts/Runtime",
    "Assets/Features/Turns/Scripts/Tests",
    "Assets/Features/Turns/Prefabs",
    "Assets/Features/PowerUps/Scripts/Runtime",
    "Assets/Features/PowerUps/Scripts/Tests",
    "Assets/Features/PowerUps/Prefabs",
    "Assets/Features/Matchmaking/Scripts/Runtime",
    "Assets/Features/Matchmaking/Scripts/Tests",
    "Assets/Features/Matchmaking/Prefabs",
    "Assets/Features/Modes/Scripts/Runtime",
    "Assets/Features/Modes/Scripts/Tests",
    "Assets/Features/Modes/Prefabs",
    "Assets/Infrastructure/InputSystem/Scripts/Runtime",
    "Assets/Infrastructure/InputSystem/Scripts/Tests",
    "Assets/Infrastructure/InputSystem/Prefabs",
    "Assets/Infrastructure/Localization/Scripts/Runtime",
    "Assets/Infrastructure/Localization/Scripts/Tests",
    "Assets/Infrastructure/Localization/Prefabs",
    "Assets/Infrastructure/Persistence/Scripts/Runtime",
    "Assets/Infrastructure/Persistence/Scripts/Tests",
    "Assets/Infrastructure/Persistence/Prefabs",
    "Assets/Infrastructure/Network/Scripts/Runtime",
    "Assets/Infrastructure/Network/Scripts/Tests",
    "Assets/Infrastructure/Network/Prefabs",
    "Assets/Infrastructure/Services/Scripts/Runtime",
    "Assets/Infrastructure/Services/Scripts/Tests",
    "Assets/Infrastructure/Services/Prefabs",
    "Assets/UI/Scripts/Runtime",
    "Assets/UI/Scripts/Tests",
    "Assets/UI/Prefabs",
    "Assets/Art/Animations",
    "Assets/Art/Materials",
    "Assets/Art/Models",
    "Assets/Art/Prefabs",
    "Assets/Art/Sprites",
    "Assets/Art/Textures",
    "Assets/Scenes/Samples",
    "Assets/Scenes/Tests",
    "Assets/Audio/Music",
    "Assets/Audio/SFX",
    "Assets/Packages",
    "Assets/Core/Scripts/Runtime/Interfaces",
    "Assets/Infrastructure/InputSystem/Scripts/Runtime/Interfaces",
    "Assets/Infrastructure/Persistence/Scripts/Runtime/Interfaces",
    "Assets/Infrastructure/Network/Scripts/Runtime/Interfaces",
];

/// Interface and service stubs, written in this order.
pub const FILES: &[(&str, &str)] = &[
    (
        "Assets/Core/Scripts/Runtime/GameManager.cs",
        include_str!("../templates/Assets/Core/Scripts/Runtime/GameManager.cs"),
    ),
    (
        "Assets/Core/Scripts/Runtime/GameState.cs",
        include_str!("../templates/Assets/Core/Scripts/Runtime/GameState.cs"),
    ),
    (
        "Assets/Core/Scripts/Runtime/WordValidator.cs",
        include_str!("../templates/Assets/Core/Scripts/Runtime/WordValidator.cs"),
    ),
    (
        "Assets/Core/Scripts/Runtime/Interfaces/IDataProvider.cs",
        include_str!("../templates/Assets/Core/Scripts/Runtime/Interfaces/IDataProvider.cs"),
    ),
    (
        "Assets/Core/Scripts/Runtime/Interfaces/IWordProvider.cs",
        include_str!("../templates/Assets/Core/Scripts/Runtime/Interfaces/IWordProvider.cs"),
    ),
    (
        "Assets/Infrastructure/InputSystem/Scripts/Runtime/Interfaces/IInputProvider.cs",
        include_str!("../templates/Assets/Infrastructure/InputSystem/Scripts/Runtime/Interfaces/IInputProvider.cs"),
    ),
    (
        "Assets/Infrastructure/Network/Scripts/Runtime/FirebaseNetworkService.cs",
        include_str!("../templates/Assets/Infrastructure/Network/Scripts/Runtime/FirebaseNetworkService.cs"),
    ),
    (
        "Assets/Infrastructure/Network/Scripts/Runtime/Interfaces/INetworkService.cs",
        include_str!("../templates/Assets/Infrastructure/Network/Scripts/Runtime/Interfaces/INetworkService.cs"),
    ),
    (
        "Assets/Infrastructure/Persistence/Scripts/Runtime/Interfaces/ILocalization.cs",
        include_str!("../templates/Assets/Infrastructure/Persistence/Scripts/Runtime/Interfaces/ILocalization.cs"),
    ),
    (
        "Assets/Infrastructure/Services/Scripts/Runtime/GameService.cs",
        include_str!("../templates/Assets/Infrastructure/Services/Scripts/Runtime/GameService.cs"),
    ),
];

/// Builds the manifest for a fresh Unity project.
pub fn unity_project() -> Manifest {
    Manifest {
        directories: DIRECTORIES.iter().copied().collect(),
        files: FILES.iter().copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_file_lands_in_a_declared_directory() {
        let manifest = unity_project();

        for (path, _) in manifest.files.iter() {
            let (parent, _) = path.rsplit_once('/').unwrap();
            assert!(
                manifest.directories.iter().any(|dir| dir == parent),
                "{path} has no declared parent"
            );
        }
    }

    #[test]
    fn manifest_sizes_match_tables() {
        let manifest = unity_project();

        assert_eq!(manifest.directories.len(), 51);
        assert_eq!(manifest.files.len(), 10);
    }

    #[test]
    fn stubs_are_embedded_verbatim() {
        let manifest = unity_project();
        let word_provider = manifest
            .files
            .get("Assets/Core/Scripts/Runtime/Interfaces/IWordProvider.cs")
            .unwrap();

        assert!(word_provider.starts_with("\n/// <summary>"));
        assert!(word_provider.contains("bool IsValidWord(string word);"));
        assert!(word_provider.ends_with("}\n"));
    }
}
