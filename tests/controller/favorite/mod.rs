//! Tests for the favorite endpoints.

mod delete;

use super::*;
