//! This crate contains all shared UI for the workspace: the page views, the
//! components they are built from, and the hooks that connect them to the
//! API client.

use dioxus::prelude::*;

pub mod components;
pub use components::{
    Column, CrudTable, FormModal, Header, InfoModal, Modal, Notice, NoticeKind, SearchInput,
    TableRow,
};

pub mod views;

pub const HOME_CONTROL_CSS: Asset = asset!("/assets/home-control.css");

mod context;
pub use context::{use_api, use_config, ApiProvider};

pub mod form;
pub use form::{validate, Field, FieldErrors, FieldKind, FormValues, SelectOption};

pub mod format;
pub use format::format_brl;

pub mod paged_list;
pub use paged_list::{use_paged_list, PagedList, PagedResource, RequestSeq};

mod download;
pub use download::save_pdf;
