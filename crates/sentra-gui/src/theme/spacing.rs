//! Spacing and sizing constants.
//!
//! A single place for the layout scale so views and components stay
//! visually consistent.

#![allow(dead_code)]

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing (4px) - tight gaps inside compact rows.
pub const SPACING_XS: f32 = 4.0;

/// Small spacing (8px) - between related elements.
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing (16px) - between groups.
pub const SPACING_MD: f32 = 16.0;

/// Large spacing (24px) - between sections.
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing (32px) - page padding.
pub const SPACING_XL: f32 = 32.0;

/// Double extra large spacing (48px) - hero areas.
pub const SPACING_XXL: f32 = 48.0;

// =============================================================================
// BORDER RADII
// =============================================================================

/// Small radius (4px) - buttons, inputs.
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius (6px) - cards.
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Large radius (8px) - modals.
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Full radius - pills and badges.
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// BORDER WIDTHS
// =============================================================================

/// Thin border (1px).
pub const BORDER_WIDTH_THIN: f32 = 1.0;

/// Medium border (2px) - focus rings.
pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// LAYOUT DIMENSIONS
// =============================================================================

/// Sidebar width when expanded.
pub const SIDEBAR_WIDTH: f32 = 240.0;

/// Sidebar width when collapsed to icons.
pub const SIDEBAR_WIDTH_COLLAPSED: f32 = 64.0;

/// Small modal width - confirmations.
pub const MODAL_WIDTH_SM: f32 = 400.0;

/// Medium modal width - forms.
pub const MODAL_WIDTH_MD: f32 = 520.0;

/// Maximum content width for form screens.
pub const FORM_MAX_WIDTH: f32 = 640.0;
