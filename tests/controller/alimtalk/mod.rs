mod consent_reminder;
mod logs;
mod pricing;
mod templates;

use super::*;
