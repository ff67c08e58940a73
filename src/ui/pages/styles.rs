//! Page stylesheet for the states the behaviors toggle

/// Classes and keyframes referenced by the page behaviors: `scrolled`,
/// `show`, `loaded`, validation states and the named animations.
pub const PAGE_CSS: &str = r#"
html { scroll-behavior: smooth; }
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; color: #1f2933; }

.hidden { display: none; }

#loader {
    position: fixed; inset: 0; z-index: 9999;
    display: flex; align-items: center; justify-content: center;
    background: linear-gradient(135deg, #1e3c72, #2a5298);
    transition: opacity 0.5s ease, visibility 0.5s ease;
}
#loader.loaded { opacity: 0; visibility: hidden; }
.loader-content { display: flex; flex-direction: column; align-items: center; gap: 1.25rem; color: #fff; }
.loader-logo { font-size: 2rem; font-weight: 700; letter-spacing: 0.05em; }
.loader-spinner {
    width: 48px; height: 48px; border-radius: 50%;
    border: 4px solid rgba(255, 255, 255, 0.25); border-top-color: #fff;
}
.loader-progress { width: 200px; height: 4px; background: rgba(255, 255, 255, 0.2); border-radius: 2px; overflow: hidden; }
.loader-progress-bar { width: 0; height: 100%; background: #fff; transition: width 0.2s ease; }

#scrollProgress {
    position: fixed; top: 0; left: 0; z-index: 1100;
    width: 100%; height: 3px; background: #ffb400;
    transform: scaleX(0); transform-origin: left;
}

.navbar {
    position: fixed; top: 0; left: 0; right: 0; z-index: 1000;
    display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between;
    padding: 1.25rem 2rem; background: transparent; transition: all 0.3s ease;
}
.navbar.scrolled { padding: 0.6rem 2rem; background: rgba(30, 60, 114, 0.95); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.15); }
.navbar-brand { color: #fff; font-weight: 700; font-size: 1.4rem; text-decoration: none; }
.navbar-toggler { display: none; background: none; border: 1px solid rgba(255, 255, 255, 0.5); color: #fff; padding: 0.3rem 0.6rem; border-radius: 4px; }
.navbar-nav { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
.nav-link { color: rgba(255, 255, 255, 0.8); text-decoration: none; }
.nav-link.active, .nav-link:hover { color: #ffb400; }
#headerScrollBar { position: absolute; left: 0; bottom: 0; width: 100%; height: 2px; background: #ffb400; transform: scaleX(0); transform-origin: left; }

@media (max-width: 991.98px) {
    .navbar-toggler { display: block; }
    .navbar-collapse { display: none; width: 100%; }
    .navbar-collapse.show { display: block; }
    .navbar-nav { flex-direction: column; gap: 0.75rem; padding-top: 1rem; }
}

.hero-section {
    position: relative; overflow: hidden; min-height: 100vh;
    display: flex; align-items: center; justify-content: center; text-align: center;
    color: #fff; background: linear-gradient(135deg, #1e3c72, #2a5298);
}
.hero-particles { position: absolute; inset: 0; pointer-events: none; }
.hero-title { font-size: 3rem; opacity: 0; }
.floating-element { position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.08); }
.floating-element:nth-child(1) { width: 120px; height: 120px; top: 15%; left: 10%; }
.floating-element:nth-child(2) { width: 80px; height: 80px; top: 60%; right: 12%; }
.floating-element:nth-child(3) { width: 160px; height: 160px; bottom: 10%; left: 40%; }
.hero-stats { display: flex; gap: 3rem; justify-content: center; margin-top: 2rem; }
.stat-number { font-size: 2rem; font-weight: 700; }

section { padding: 5rem 2rem; }
.section-title { text-align: center; margin-bottom: 3rem; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 2rem; max-width: 1100px; margin: 0 auto; }
.service-card, .pricing-card, .feature-item {
    padding: 2rem; border-radius: 12px; background: #fff;
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08); transition: transform 0.3s ease;
}
.pricing-card .price { font-size: 2.25rem; font-weight: 700; }

.contact-form { max-width: 640px; margin: 0 auto; display: flex; flex-direction: column; gap: 1rem; }
.form-control { width: 100%; box-sizing: border-box; padding: 0.75rem; border: 1px solid #cbd2d9; border-radius: 6px; font: inherit; }
.form-control.is-invalid { border-color: #dc3545; }
.form-control.is-valid { border-color: #28a745; }
.invalid-feedback { display: none; color: #dc3545; font-size: 0.875rem; margin-top: 0.25rem; }
.invalid-feedback.show { display: block; }
.btn { padding: 0.75rem 1.5rem; border: none; border-radius: 6px; background: #2a5298; color: #fff; font: inherit; cursor: pointer; }
.btn:disabled { opacity: 0.85; cursor: default; }

.footer { padding: 3rem 2rem; background: #102a43; color: #d9e2ec; }
.footer-stats { display: flex; gap: 3rem; margin-bottom: 2rem; }
.newsletter-form { display: flex; gap: 0.5rem; max-width: 420px; }
.newsletter-form .form-control.is-invalid { border-color: #dc3545; }
.newsletter-success {
    position: absolute; left: 0; top: 100%; margin-top: 0.5rem;
    color: #28a745; opacity: 0; transform: translateY(-6px); transition: all 0.3s ease;
}
.newsletter-success.show { opacity: 1; transform: translateY(0); }

.back-to-top {
    position: fixed; right: 1.5rem; bottom: 1.5rem; z-index: 900;
    width: 44px; height: 44px; border-radius: 50%; border: none;
    background: #2a5298; color: #fff; cursor: pointer;
    opacity: 0; visibility: hidden; transition: all 0.3s ease;
}
.back-to-top.show { opacity: 1; visibility: visible; }

@keyframes float {
    0%, 100% { transform: translateY(0); opacity: 0.3; }
    50% { transform: translateY(-20px); opacity: 0.8; }
}
@keyframes logoFloat {
    from { transform: translateY(0); }
    to { transform: translateY(-10px); }
}
@keyframes spinnerRotate {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}
@keyframes spinnerPulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.6; }
}
"#;
