//! Global CSS styles for the APOD gallery.
//!
//! Deep-sky aesthetic with a single accent color for interactive
//! elements.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SKY (Backgrounds) */
  --sky-black: #090b12;
  --sky-panel: #11141f;
  --sky-border: #232738;

  /* ACCENT (Buttons, Links) */
  --accent: #6fa8ff;
  --accent-glow: rgba(111, 168, 255, 0.35);

  /* TEXT */
  --text-primary: #f2f4fa;
  --text-secondary: rgba(242, 244, 250, 0.72);
  --text-muted: rgba(242, 244, 250, 0.5);

  /* SEMANTIC */
  --danger: #ff5d73;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--sky-black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.5;
}

.app {
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
}

.app.scroll-locked {
  height: 100vh;
  overflow: hidden;
}

/* === Header === */
.site-header {
  text-align: center;
  margin-bottom: 2rem;
}

.site-title {
  font-size: 2rem;
  letter-spacing: 0.02em;
}

.site-tagline {
  color: var(--text-secondary);
  margin-top: 0.25rem;
}

.btn-load {
  margin-top: 1.25rem;
  padding: 0.6rem 1.6rem;
  font-size: 1rem;
  color: var(--sky-black);
  background: var(--accent);
  border: none;
  border-radius: 6px;
  cursor: pointer;
  transition: box-shadow var(--transition-fast);
}

.btn-load:hover:not(:disabled) {
  box-shadow: 0 0 14px var(--accent-glow);
}

.btn-load:disabled {
  opacity: 0.55;
  cursor: default;
}

/* === Did You Know === */
.did-you-know {
  background: var(--sky-panel);
  border: 1px solid var(--sky-border);
  border-left: 3px solid var(--accent);
  border-radius: 6px;
  padding: 1rem 1.25rem;
  margin-bottom: 1.5rem;
}

.did-you-know h3 {
  font-size: 1rem;
  margin-bottom: 0.35rem;
}

.did-you-know p {
  color: var(--text-secondary);
}

/* === Gallery === */
.gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.25rem;
}

.placeholder {
  grid-column: 1 / -1;
  text-align: center;
  color: var(--text-muted);
  padding: 3rem 0;
  font-size: 1.1rem;
}

.gallery-item {
  background: var(--sky-panel);
  border: 1px solid var(--sky-border);
  border-radius: 8px;
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-fast), border-color var(--transition-fast);
}

.gallery-item:hover,
.gallery-item:focus {
  transform: translateY(-2px);
  border-color: var(--accent);
  outline: none;
}

.media-wrap {
  position: relative;
  aspect-ratio: 16 / 10;
  background: var(--sky-black);
}

.card-media {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

.video-play-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2.5rem;
  color: var(--text-primary);
  text-shadow: 0 0 12px rgba(0, 0, 0, 0.8);
  pointer-events: none;
}

.media-unsupported {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100%;
  color: var(--text-muted);
  padding: 1rem;
}

.card-caption {
  padding: 0.75rem 1rem;
}

.card-caption small {
  color: var(--text-muted);
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(5, 6, 10, 0.85);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  z-index: 100;
  outline: none;
}

.modal {
  position: relative;
  background: var(--sky-panel);
  border: 1px solid var(--sky-border);
  border-radius: 10px;
  max-width: 860px;
  width: 100%;
  max-height: 85vh;
  overflow-y: auto;
}

.modal-close {
  position: absolute;
  top: 0.5rem;
  right: 0.75rem;
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: 1.75rem;
  cursor: pointer;
  line-height: 1;
}

.modal-close:hover {
  color: var(--danger);
}

.modal-body {
  padding: 2rem;
}

.modal-media {
  text-align: center;
  margin-bottom: 1.5rem;
}

.modal-image {
  max-width: 100%;
  max-height: 55vh;
  border-radius: 6px;
}

.watch-button {
  display: inline-block;
  margin-top: 0.75rem;
  padding: 0.5rem 1.25rem;
  color: var(--sky-black);
  background: var(--accent);
  border-radius: 6px;
  text-decoration: none;
}

.watch-button:hover {
  box-shadow: 0 0 14px var(--accent-glow);
}

.modal-title {
  font-size: 1.5rem;
  margin-bottom: 0.25rem;
}

.modal-date {
  color: var(--text-muted);
  margin-bottom: 1rem;
}

.modal-explanation {
  color: var(--text-secondary);
  white-space: pre-line;
}
"#;
