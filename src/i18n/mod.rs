// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! UI labels are looked up through Fluent bundles embedded at compile time
//! from `assets/i18n/*.ftl`. The locale is resolved from the CLI, then the
//! config file, then the operating system, falling back to `en-US`.

pub mod fluent;
