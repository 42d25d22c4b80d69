//! Well-known locations that grow with caches, build output and tool data.

use super::{Category, SafetyTier};

/// One location the audit checks by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub category: Category,
    pub label: &'static str,
    /// Path template; `~` is the home directory.
    pub path: &'static str,
    pub tier: SafetyTier,
    /// Shown under the finding. Empty means no note.
    pub advisory: &'static str,
}

impl CatalogEntry {
    pub const fn new(
        category: Category,
        label: &'static str,
        path: &'static str,
        tier: SafetyTier,
        advisory: &'static str,
    ) -> Self {
        Self {
            category,
            label,
            path,
            tier,
            advisory,
        }
    }
}

/// A command line that reclaims space for a tool, shown after the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupCommand {
    pub tool: &'static str,
    pub command: &'static str,
}

use Category::*;
use SafetyTier::*;

pub const CATALOG: &[CatalogEntry] = &[
    // Docker
    CatalogEntry::new(
        Docker,
        "Docker Desktop VM disk",
        "~/Library/Containers/com.docker.docker/Data/vms",
        Review,
        "Holds every image, container and volume. Prune with docker instead of deleting.",
    ),
    CatalogEntry::new(
        Docker,
        "Docker buildx cache",
        "~/.docker/buildx",
        Caution,
        "Builds are slower until the cache warms up again.",
    ),
    CatalogEntry::new(
        Docker,
        "Docker data root",
        "/var/lib/docker",
        Review,
        "Managed by the Docker daemon. Use `docker system prune`.",
    ),
    // Package managers
    CatalogEntry::new(PackageManagers, "npm cache", "~/.npm/_cacache", Safe, ""),
    CatalogEntry::new(PackageManagers, "Yarn cache", "~/Library/Caches/Yarn", Safe, ""),
    CatalogEntry::new(PackageManagers, "Yarn cache (XDG)", "~/.cache/yarn", Safe, ""),
    CatalogEntry::new(
        PackageManagers,
        "pnpm store",
        "~/Library/pnpm/store",
        Caution,
        "Hard-linked into projects. Prefer `pnpm store prune`.",
    ),
    CatalogEntry::new(
        PackageManagers,
        "pnpm store (XDG)",
        "~/.local/share/pnpm/store",
        Caution,
        "Hard-linked into projects. Prefer `pnpm store prune`.",
    ),
    CatalogEntry::new(PackageManagers, "Bun cache", "~/.bun/install/cache", Safe, ""),
    CatalogEntry::new(PackageManagers, "pip cache", "~/Library/Caches/pip", Safe, ""),
    CatalogEntry::new(PackageManagers, "pip cache (XDG)", "~/.cache/pip", Safe, ""),
    CatalogEntry::new(
        PackageManagers,
        "Homebrew downloads",
        "~/Library/Caches/Homebrew",
        Safe,
        "",
    ),
    CatalogEntry::new(
        PackageManagers,
        "CocoaPods cache",
        "~/Library/Caches/CocoaPods",
        Safe,
        "",
    ),
    CatalogEntry::new(
        PackageManagers,
        "Cargo registry",
        "~/.cargo/registry",
        Caution,
        "Crates are downloaded again on the next build.",
    ),
    CatalogEntry::new(
        PackageManagers,
        "Cargo git checkouts",
        "~/.cargo/git",
        Caution,
        "Git dependencies are fetched again on the next build.",
    ),
    CatalogEntry::new(
        PackageManagers,
        "Go module cache",
        "~/go/pkg/mod",
        Caution,
        "Files are read-only. Use `go clean -modcache`.",
    ),
    CatalogEntry::new(
        PackageManagers,
        "Gradle caches",
        "~/.gradle/caches",
        Caution,
        "Dependencies are downloaded again on the next build.",
    ),
    CatalogEntry::new(
        PackageManagers,
        "Maven repository",
        "~/.m2/repository",
        Caution,
        "Dependencies are downloaded again on the next build.",
    ),
    // IDE tools
    CatalogEntry::new(
        IdeTools,
        "Xcode DerivedData",
        "~/Library/Developer/Xcode/DerivedData",
        Safe,
        "Rebuilt by the next Xcode build.",
    ),
    CatalogEntry::new(
        IdeTools,
        "Xcode Archives",
        "~/Library/Developer/Xcode/Archives",
        Review,
        "Contains dSYMs for shipped builds.",
    ),
    CatalogEntry::new(
        IdeTools,
        "iOS DeviceSupport",
        "~/Library/Developer/Xcode/iOS DeviceSupport",
        Caution,
        "Regenerated when a device is connected again.",
    ),
    CatalogEntry::new(
        IdeTools,
        "Simulator devices",
        "~/Library/Developer/CoreSimulator/Devices",
        Review,
        "Simulator app data. `xcrun simctl delete unavailable` removes stale ones.",
    ),
    CatalogEntry::new(
        IdeTools,
        "Simulator caches",
        "~/Library/Developer/CoreSimulator/Caches",
        Safe,
        "",
    ),
    CatalogEntry::new(IdeTools, "JetBrains caches", "~/Library/Caches/JetBrains", Safe, ""),
    CatalogEntry::new(IdeTools, "JetBrains caches (XDG)", "~/.cache/JetBrains", Safe, ""),
    CatalogEntry::new(
        IdeTools,
        "VS Code cache",
        "~/Library/Application Support/Code/Cache",
        Safe,
        "",
    ),
    CatalogEntry::new(
        IdeTools,
        "VS Code cached data",
        "~/Library/Application Support/Code/CachedData",
        Safe,
        "",
    ),
    CatalogEntry::new(
        IdeTools,
        "Android system images",
        "~/Library/Android/sdk/system-images",
        Caution,
        "Downloadable again through the SDK manager.",
    ),
    CatalogEntry::new(
        IdeTools,
        "Android emulators",
        "~/.android/avd",
        Review,
        "Emulator disks hold app data.",
    ),
    // Cloud and virtual machines
    CatalogEntry::new(CloudVm, "gcloud logs", "~/.config/gcloud/logs", Safe, ""),
    CatalogEntry::new(
        CloudVm,
        "Vagrant boxes",
        "~/.vagrant.d/boxes",
        Caution,
        "Downloaded again by `vagrant up`.",
    ),
    CatalogEntry::new(
        CloudVm,
        "Minikube",
        "~/.minikube",
        Caution,
        "Cluster state is lost. Recreated by `minikube start`.",
    ),
    CatalogEntry::new(
        CloudVm,
        "VirtualBox VMs",
        "~/VirtualBox VMs",
        Review,
        "Virtual machine disks. Deleting destroys the VMs.",
    ),
    CatalogEntry::new(
        CloudVm,
        "Parallels VMs",
        "~/Parallels",
        Review,
        "Virtual machine disks. Deleting destroys the VMs.",
    ),
    CatalogEntry::new(
        CloudVm,
        "UTM VMs",
        "~/Library/Containers/com.utmapp.UTM",
        Review,
        "Virtual machine disks. Deleting destroys the VMs.",
    ),
    // System caches
    CatalogEntry::new(
        SystemCaches,
        "User caches",
        "~/Library/Caches",
        Review,
        "Shared by every app. Several entries above live inside it.",
    ),
    CatalogEntry::new(
        SystemCaches,
        "User cache directory (XDG)",
        "~/.cache",
        Review,
        "Shared by every app. Several entries above live inside it.",
    ),
    CatalogEntry::new(SystemCaches, "User logs", "~/Library/Logs", Safe, ""),
    CatalogEntry::new(
        SystemCaches,
        "System caches",
        "/Library/Caches",
        Review,
        "Owned by system services. Needs root to inspect fully.",
    ),
    CatalogEntry::new(
        SystemCaches,
        "System logs",
        "/private/var/log",
        Review,
        "Rotated by the system. Needs root to inspect fully.",
    ),
    CatalogEntry::new(
        SystemCaches,
        "APT package archives",
        "/var/cache/apt/archives",
        Safe,
        "Remove with `sudo apt-get clean`.",
    ),
    // Trash and misc
    CatalogEntry::new(
        TrashMisc,
        "Trash",
        "~/.Trash",
        Caution,
        "Emptying the trash is permanent.",
    ),
    CatalogEntry::new(
        TrashMisc,
        "Trash (XDG)",
        "~/.local/share/Trash",
        Caution,
        "Emptying the trash is permanent.",
    ),
    CatalogEntry::new(
        TrashMisc,
        "Downloads",
        "~/Downloads",
        Review,
        "Personal files. Review by hand.",
    ),
    CatalogEntry::new(
        TrashMisc,
        "iOS device backups",
        "~/Library/Application Support/MobileSync/Backup",
        Review,
        "May be the only copy of a device backup.",
    ),
];

pub const CLEANUP_COMMANDS: &[CleanupCommand] = &[
    CleanupCommand {
        tool: "Docker",
        command: "docker system prune -a --volumes",
    },
    CleanupCommand {
        tool: "npm",
        command: "npm cache clean --force",
    },
    CleanupCommand {
        tool: "Yarn",
        command: "yarn cache clean",
    },
    CleanupCommand {
        tool: "pnpm",
        command: "pnpm store prune",
    },
    CleanupCommand {
        tool: "pip",
        command: "pip cache purge",
    },
    CleanupCommand {
        tool: "Homebrew",
        command: "brew cleanup --prune=all",
    },
    CleanupCommand {
        tool: "Go",
        command: "go clean -modcache",
    },
    CleanupCommand {
        tool: "Gradle",
        command: "rm -rf ~/.gradle/caches",
    },
    CleanupCommand {
        tool: "Xcode",
        command: "rm -rf ~/Library/Developer/Xcode/DerivedData",
    },
    CleanupCommand {
        tool: "Simulators",
        command: "xcrun simctl delete unavailable",
    },
    CleanupCommand {
        tool: "Cargo targets",
        command: "cargo clean (inside each project)",
    },
    CleanupCommand {
        tool: "node_modules",
        command: "npx npkill",
    },
    CleanupCommand {
        tool: "APT",
        command: "sudo apt-get clean",
    },
];
