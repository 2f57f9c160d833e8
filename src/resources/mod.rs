//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution, plus the asset and input interfaces
//! the driver plugs in.
//!
//! Overview
//! - `animationstore` – sectioned animation definitions shared across entities
//! - `assets` – asset provider trait and the JSON manifest provider
//! - `collision` – collision group rules and counters
//! - `framestore` – frame handles, pixel masks and named frame sequences
//! - `gameconfig` – INI-backed configuration
//! - `gamestatus` – running / game over / quit
//! - `input` – input provider trait and a scripted provider
//! - `scoreboard` – distance travelled
//! - `screensize` – playfield dimensions and boundary queries
//! - `scrollspeed` – world scroll speed
//! - `spawner` – hazard spawn pacing
//! - `worldtime` – tick counter
pub mod animationstore;
pub mod assets;
pub mod collision;
pub mod framestore;
pub mod gameconfig;
pub mod gamestatus;
pub mod input;
pub mod scoreboard;
pub mod screensize;
pub mod scrollspeed;
pub mod spawner;
pub mod worldtime;
