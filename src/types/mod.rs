//! Typed inputs for the named operations.
//!
//! | Type | Used by |
//! |------|---------|
//! | [`ListContainersArgs`], [`ContainerRef`], [`ContainerLogsArgs`], [`ContainerActionArgs`] | container operations |
//! | [`CreateStackArgs`], [`UpdateStackArgs`], [`StackActionArgs`], [`EnvVar`] | stack operations |
//! | [`ImageActionArgs`], [`VolumeActionArgs`], [`NetworkActionArgs`] | image, volume and network operations |

pub mod args;

pub use args::{
    ContainerActionArgs, ContainerLogsArgs, ContainerRef, CreateStackArgs, EnvVar,
    ImageActionArgs, ListContainersArgs, NetworkActionArgs, StackActionArgs, UpdateStackArgs,
    VolumeActionArgs,
};
