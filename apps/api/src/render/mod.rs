// Document rendering: live preview (structured + HTML) and LaTeX export.
// Both outputs share the placeholder rules in `defaults` and the `{field}` filler in
// `template`. Neither computes a score; callers pass one in.

pub mod defaults;
pub mod handlers;
pub mod html;
pub mod latex;
pub mod preview;
pub mod template;
pub mod templates;
