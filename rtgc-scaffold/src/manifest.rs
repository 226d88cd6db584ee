//! Fixed project manifest
//!
//! The manifest is the ordered list of relative paths that make up an RTGC
//! project tree. Each entry carries a [`ContentPolicy`] derived from its file
//! name, which decides the single boilerplate line written into a freshly
//! created file.

use std::path::Path;

/// Name of the directory created under the chosen base path
pub const PROJECT_DIR_NAME: &str = "RTGC";

/// Relative paths of every file in an RTGC project, in creation order
const RTGC_FILES: &[&str] = &[
    "src/main.cpp",
    "src/core/Engine.hpp",
    "src/core/Engine.cpp",
    "src/core/ECSManager.hpp",
    "src/core/ECSManager.cpp",
    "src/core/Logger.hpp",
    "src/core/SnapshotSystem.hpp",
    "src/core/SnapshotSystem.cpp",
    "src/graphics/Renderer.hpp",
    "src/graphics/Renderer.cpp",
    "src/graphics/Shader.hpp",
    "src/graphics/Shader.cpp",
    "src/graphics/Camera.hpp",
    "src/graphics/Camera.cpp",
    "src/graphics/ThirdPersonCamera.hpp",
    "src/graphics/ThirdPersonCamera.cpp",
    "src/graphics/FirstPersonCamera.hpp",
    "src/graphics/FirstPersonCamera.cpp",
    "src/graphics/Mesh.hpp",
    "src/graphics/Mesh.cpp",
    "src/graphics/RenderableVehicle.hpp",
    "src/graphics/RenderableVehicle.cpp",
    "src/graphics/LightingSystem.hpp",
    "src/graphics/LightingSystem.cpp",
    "src/graphics/ShadowMap.hpp",
    "src/graphics/ShadowMap.cpp",
    "src/graphics/PostProcessingSystem.hpp",
    "src/graphics/PostProcessingSystem.cpp",
    "src/graphics/AnimationSystem.hpp",
    "src/graphics/AnimationSystem.cpp",
    "src/physics/PhysicsUpdateSystem.hpp",
    "src/physics/PhysicsUpdateSystem.cpp",
    "src/physics/PhysXInitializer.hpp",
    "src/physics/PhysXInitializer.cpp",
    "src/physics/CharacterController.hpp",
    "src/physics/CharacterController.cpp",
    "src/network/NetworkManager.hpp",
    "src/network/NetworkManager.cpp",
    "src/network/PlayerState.hpp",
    "src/network/NetworkSyncSystem.hpp",
    "src/network/NetworkSyncSystem.cpp",
    "src/network/SpawnSystem.hpp",
    "src/network/SpawnSystem.cpp",
    "src/world/CityGenerator.hpp",
    "src/world/CityGenerator.cpp",
    "src/world/RoadNetwork.hpp",
    "src/world/RoadNetwork.cpp",
    "src/world/Terrain.hpp",
    "src/world/Terrain.cpp",
    "src/audio/AudioSystem.hpp",
    "src/audio/AudioSystem.cpp",
    "src/audio/AudioEventManager.hpp",
    "src/audio/AudioEventManager.cpp",
    "src/audio/FootstepSystem.hpp",
    "src/audio/FootstepSystem.cpp",
    "src/audio/AmbientSystem.hpp",
    "src/audio/AmbientSystem.cpp",
    "src/ui/HudUI.hpp",
    "src/ui/HudUI.cpp",
    "src/ui/MenuSystem.hpp",
    "src/ui/MenuSystem.cpp",
    "src/ui/InventoryUI.hpp",
    "src/ui/InventoryUI.cpp",
    "src/game/GameLevel.hpp",
    "src/game/GameLevel.cpp",
    "src/game/VehicleType.hpp",
    "src/game/VehicleType.cpp",
    "src/game/VehicleFactory.hpp",
    "src/game/VehicleFactory.cpp",
    "src/game/Vehicle.hpp",
    "src/game/Vehicle.cpp",
    "src/game/InputManager.hpp",
    "src/game/InputManager.cpp",
    "src/game/BuildingSystem.hpp",
    "src/game/BuildingSystem.cpp",
    "src/game/WeatherSystem.hpp",
    "src/game/WeatherSystem.cpp",
    "src/game/Inventory.hpp",
    "src/game/Inventory.cpp",
    "src/game/DamageSystem.hpp",
    "src/game/DamageSystem.cpp",
    "src/game/WeaponSystem.hpp",
    "src/game/WeaponSystem.cpp",
    "src/game/InteractionSystem.hpp",
    "src/game/InteractionSystem.cpp",
    "src/game/QuestSystem.hpp",
    "src/game/QuestSystem.cpp",
    "src/game/ProgressionSystem.hpp",
    "src/game/ProgressionSystem.cpp",
    "src/components/TransformComponent.hpp",
    "src/components/VehicleComponent.hpp",
    "src/components/RenderableComponent.hpp",
    "src/components/CharacterComponent.hpp",
    "src/components/BuildingComponent.hpp",
    "src/components/InventoryComponent.hpp",
    "src/systems/RenderSystem.hpp",
    "src/systems/RenderSystem.cpp",
    "src/systems/PhysicsUpdateSystem.hpp",
    "src/systems/PhysicsUpdateSystem.cpp",
    "src/systems/CharacterSystem.hpp",
    "src/systems/CharacterSystem.cpp",
    "src/systems/NetworkSyncSystem.hpp",
    "src/systems/NetworkSyncSystem.cpp",
    "src/systems/AIController.hpp",
    "src/ai/AIController.hpp",
    "src/ai/AIController.cpp",
    "src/cuda/WindCuda.cu",
    "src/cuda/WindCuda.h",
    "src/cuda/SuspensionCuda.cu",
    "src/cuda/SuspensionCuda.h",
    "src/cuda/TractionCuda.cu",
    "src/cuda/TractionCuda.h",
    "src/cuda/TerrainCuda.cu",
    "src/cuda/TerrainCuda.h",
    "src/math/Vector3.hpp",
    "src/math/Mass.hpp",
    "src/math/PhysicsUtils.hpp",
    "src/objects/GameObject.hpp",
    "src/objects/GameObject.cpp",
    "src/objects/RenderableObject.hpp",
    "src/objects/RenderableObject.cpp",
    "src/objects/PhysicsObject.hpp",
    "src/objects/PhysicsObject.cpp",
    "src/objects/AudioObject.hpp",
    "src/objects/AudioObject.cpp",
    "src/platform/PlatformAbstraction.hpp",
    "src/platform/PlatformAbstraction.cpp",
    "src/debug/Profiler.hpp",
    "src/debug/Profiler.cpp",
    "assets/models/kamaz.obj",
    "assets/shaders/vertex.glsl",
    "assets/shaders/fragment.glsl",
    "CMakeLists.txt",
    "build.bat",
];

/// Source-like suffixes that receive a `//` comment header
const SOURCE_EXTENSIONS: &[&str] = &["cpp", "hpp", "h", "cu"];

/// Asset suffixes that receive a `#` comment header
const ASSET_EXTENSIONS: &[&str] = &["glsl", "obj"];

/// Build manifest recognised by file name
const BUILD_MANIFEST_NAME: &str = "CMakeLists.txt";

/// What gets written into a newly created file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentPolicy {
    /// Zero-byte file
    Empty,
    /// C++/CUDA source or header
    SourceHeader,
    /// Shader or model asset
    AssetHeader,
    /// The CMake build manifest
    BuildManifest,
}

impl ContentPolicy {
    /// Pick the policy for a relative path
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        let path = Path::new(path);

        if path.file_name().is_some_and(|name| name == BUILD_MANIFEST_NAME) {
            return Self::BuildManifest;
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if SOURCE_EXTENSIONS.contains(&ext) => Self::SourceHeader,
            Some(ext) if ASSET_EXTENSIONS.contains(&ext) => Self::AssetHeader,
            _ => Self::Empty,
        }
    }

    /// Boilerplate line for this policy, if any
    #[must_use]
    pub const fn header(self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::SourceHeader => Some("// Auto-generated file\n"),
            Self::AssetHeader => Some("# Auto-generated asset file\n"),
            Self::BuildManifest => Some("# CMakeLists.txt for RTGC project\n"),
        }
    }
}

/// A single file the scaffolder is responsible for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    path: &'static str,
    policy: ContentPolicy,
}

impl ManifestEntry {
    /// Create an entry, deriving its content policy from the file name
    #[must_use]
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            policy: ContentPolicy::for_path(path),
        }
    }

    /// Path relative to the project root, `/`-separated
    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Content policy for this entry
    #[must_use]
    pub const fn policy(&self) -> ContentPolicy {
        self.policy
    }
}

/// Immutable, ordered list of manifest entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Build a manifest from relative paths, keeping their order
    #[must_use]
    pub fn from_paths(paths: &[&'static str]) -> Self {
        Self {
            entries: paths.iter().copied().map(ManifestEntry::new).collect(),
        }
    }

    /// The RTGC project layout
    #[must_use]
    pub fn rtgc() -> Self {
        Self::from_paths(RTGC_FILES)
    }

    /// Entries in creation order
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &ManifestEntry> {
        self.entries.iter()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
