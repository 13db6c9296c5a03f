//! Page-wide CSS that the controllers rely on.

/// Toast entrance animation and the mobile navigation layout.
pub const GLOBAL_STYLESHEET: &str = r"
  @keyframes slideInRight {
    from {
      transform: translateX(100%);
      opacity: 0;
    }
    to {
      transform: translateX(0);
      opacity: 1;
    }
  }

  @media (max-width: 768px) {
    .nav-menu {
      position: absolute;
      top: 60px;
      right: 0;
      left: 0;
      background: white;
      flex-direction: column;
      gap: 0;
      display: none;
      padding: 1rem 0;
      box-shadow: 0 5px 15px rgba(0,0,0,0.1);
      z-index: 999;
      justify-content: center;
      align-items: center;
      text-align: center;
    }

    .nav-menu.open {
      display: flex !important;
      flex-direction: column;
    }

    body.dark-mode .nav-menu {
      background: rgba(10, 14, 39, 0.95);
    }

    .nav-menu li a {
      display: block;
      padding: 1rem 2rem;
      color: inherit;
    }

    .hamburger {
      display: flex;
    }

    .hamburger.active span:nth-child(1) {
      transform: rotate(45deg) translate(8px, 8px);
    }

    .hamburger.active span:nth-child(2) {
      opacity: 0;
    }

    .hamburger.active span:nth-child(3) {
      transform: rotate(-45deg) translate(7px, -7px);
    }
  }
";

/// Appends [`GLOBAL_STYLESHEET`] to `<head>`.
///
/// # Errors
/// Returns [`folio_kernel::KernelError`] when the document has no head.
#[cfg(feature = "web")]
pub fn inject() -> Result<(), folio_kernel::KernelError> {
    folio_kernel::web::inject_stylesheet(GLOBAL_STYLESHEET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_covers_toast_and_mobile_menu() {
        for rule in [
            "@keyframes slideInRight",
            "@media (max-width: 768px)",
            ".nav-menu.open",
            "body.dark-mode .nav-menu",
            ".hamburger.active span:nth-child(3)",
        ] {
            assert!(GLOBAL_STYLESHEET.contains(rule), "missing {rule}");
        }
    }
}
