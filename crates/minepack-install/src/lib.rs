//! First-launch installer for bundled game data.
//!
//! One run stages the bundled archive into a scratch file, migrates user
//! data out of the deprecated storage directory, stream-extracts the
//! archive into the current user-data directory with percentage progress,
//! and reports exactly one terminal outcome.
//!
//! The host environment supplies two capabilities: an [`AssetSource`]
//! resolving bundled resources by name, and a [`ProgressNotifier`] owning
//! whatever persistent progress surface the platform provides. Progress
//! and the terminal outcome are also delivered as [`InstallEvent`]s on the
//! channel returned by [`Installer::spawn`].
//!
//! ```rust,no_run
//! use minepack_install::{DirSource, Installer, NullNotifier};
//!
//! # async fn demo() {
//! let installer = Installer::new(
//!     DirSource::new("/opt/app/assets"),
//!     NullNotifier,
//!     "Minetest.zip",
//!     "/storage/Minetest",
//!     "/data/user-data",
//! );
//!
//! let (task, mut events) = installer.spawn();
//! while let Some(event) = events.recv().await {
//!     println!("{event:?}");
//! }
//! # task.await.unwrap();
//! # }
//! ```

mod error;

pub mod event;
pub mod installer;
pub mod notify;
pub mod plan;
pub mod source;

pub use error::{Error, Result};
pub use event::InstallEvent;
pub use installer::Installer;
pub use notify::{NullNotifier, ProgressNotifier};
pub use plan::MigrationPlan;
pub use source::{AssetSource, DirSource};
