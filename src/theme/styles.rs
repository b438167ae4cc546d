//! Global CSS styles for Chatpane.
//!
//! Dark terminal palette. Sent messages use the accent color, received
//! messages the neutral surface.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --void-black: #0a0a0a;
  --void-lighter: #0f1314;
  --void-border: #1f2526;
  --surface: #161b1c;

  /* Accent (our own messages) */
  --accent: #00d4aa;
  --accent-deep: #00826a;
  --accent-glow: rgba(0, 212, 170, 0.3);

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Semantic */
  --danger: #ff3366;
  --danger-glow: rgba(255, 51, 102, 0.25);
  --success: #39ff14;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--void-black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
}

/* === Shell === */
.app-shell {
  display: flex;
  flex-direction: column;
  height: 100vh;
}

.chat-header {
  padding: 0.75rem 1.25rem;
  border-bottom: 1px solid var(--void-border);
  background: var(--void-lighter);
}

.chat-title {
  font-size: var(--text-base);
  font-weight: 600;
}

.startup-error {
  padding: 2rem;
  color: var(--danger);
}

/* === Message list === */
.message-view {
  flex: 1;
  min-height: 0;
  display: flex;
  flex-direction: column;
}

.message-scroll {
  flex: 1;
  overflow-y: auto;
  padding: 1rem 1.25rem;
  scroll-behavior: smooth;
}

.message-scroll.scrolling {
  pointer-events: none;
}

.message-column {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  max-width: 56rem;
  margin: 0 auto;
}

.scroll-anchor {
  height: 1px;
}

.date-separator {
  align-self: center;
  margin: 1rem auto 0.5rem;
  padding: 0.2rem 0.75rem;
  border-radius: 999px;
  background: var(--surface);
  color: var(--text-muted);
  font-size: var(--text-xs);
  text-align: center;
  width: fit-content;
}

.message-row {
  display: flex;
}

.message-row-sent {
  justify-content: flex-end;
}

.message-row-received {
  justify-content: flex-start;
}

.message-container {
  position: relative;
  max-width: 70%;
  cursor: pointer;
  user-select: text;
}

/* === Bubbles === */
.message-bubble {
  position: relative;
  padding: 0.6rem 0.9rem 0.4rem;
  border-radius: 1rem;
  transition: box-shadow var(--transition-fast), transform var(--transition-fast);
}

.message-bubble:hover .copy-hint {
  opacity: 1;
}

.bubble-accent {
  background: var(--accent-deep);
  color: var(--text-primary);
  border-bottom-right-radius: 0.25rem;
}

.bubble-neutral {
  background: var(--surface);
  color: var(--text-primary);
  border-bottom-left-radius: 0.25rem;
}

.bubble-accent-code {
  background: #0d2a25;
  border: 1px solid var(--accent-deep);
  border-bottom-right-radius: 0.25rem;
}

.bubble-neutral-code {
  background: #111617;
  border: 1px solid var(--void-border);
  border-bottom-left-radius: 0.25rem;
}

.bubble-focused {
  box-shadow: 0 0 0 2px var(--accent-glow);
  transform: scale(1.01);
}

.message-bubble-sender {
  margin-bottom: 0.2rem;
  color: var(--accent);
  font-size: var(--text-xs);
  font-weight: 600;
}

.message-bubble-content {
  white-space: pre-wrap;
  word-break: break-word;
  line-height: 1.4;
}

.message-bubble-time {
  display: block;
  margin-top: 0.25rem;
  color: var(--text-muted);
  font-size: 0.65rem;
  text-align: right;
}

.copy-hint {
  position: absolute;
  top: 0.35rem;
  right: 0.4rem;
  opacity: 0;
  color: var(--text-muted);
  transition: opacity var(--transition-fast);
}

/* === Code messages === */
.code-message {
  min-width: 16rem;
}

.code-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.5rem;
  margin-bottom: 0.35rem;
}

.code-language {
  color: var(--text-secondary);
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  text-transform: lowercase;
}

.code-body {
  overflow-x: auto;
  padding: 0.6rem;
  border-radius: 0.4rem;
  background: #2b303b;
  font-family: var(--font-mono);
  font-size: var(--text-sm);
}

.code-body pre {
  margin: 0;
  background: transparent !important;
}

/* === Action menu === */
.message-actions {
  position: absolute;
  bottom: calc(100% + 0.4rem);
  right: 0;
  z-index: 20;
}

.message-actions-panel {
  display: flex;
  gap: 0.25rem;
  padding: 0.25rem;
  border: 1px solid var(--void-border);
  border-radius: 0.6rem;
  background: var(--void-lighter);
  box-shadow: 0 6px 20px rgba(0, 0, 0, 0.5);
}

.message-actions-arrow {
  position: absolute;
  right: 1rem;
  bottom: -5px;
  width: 10px;
  height: 10px;
  background: var(--void-lighter);
  border-right: 1px solid var(--void-border);
  border-bottom: 1px solid var(--void-border);
  transform: rotate(45deg);
}

/* === Buttons === */
.btn-outline,
.btn-danger,
.btn-ghost,
.btn-action {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.4rem;
  border-radius: 0.5rem;
  font-family: inherit;
  font-size: var(--text-sm);
  cursor: pointer;
  transition: background var(--transition-fast), border-color var(--transition-fast);
}

.btn-outline {
  padding: 0.5rem 1rem;
  border: 1px solid var(--void-border);
  background: transparent;
  color: var(--text-primary);
}

.btn-outline:hover {
  border-color: var(--text-muted);
}

.btn-danger {
  padding: 0.5rem 1rem;
  border: 1px solid var(--danger);
  background: var(--danger);
  color: #fff;
}

.btn-danger:hover {
  box-shadow: 0 0 12px var(--danger-glow);
}

.btn-ghost {
  padding: 0.25rem 0.5rem;
  border: none;
  background: transparent;
  color: var(--text-secondary);
}

.btn-ghost:hover {
  color: var(--text-primary);
}

.btn-action {
  width: 2rem;
  height: 2rem;
  border: none;
  background: transparent;
  color: var(--text-secondary);
}

.btn-action:hover {
  background: var(--surface);
  color: var(--text-primary);
}

.action-delete:hover {
  color: var(--danger);
}

.btn-full {
  width: 100%;
}

/* === Dialog === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.7);
}

.dialog-panel {
  width: 100%;
  border: 1px solid var(--void-border);
  border-radius: 0.9rem;
  background: var(--void-lighter);
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.6);
}

.dialog-desktop {
  max-width: 28rem;
}

.dialog-mobile {
  max-width: 95vw;
}

.dialog-header {
  display: flex;
  gap: 0.75rem;
  padding: 1.25rem 1.25rem 0.5rem;
}

.dialog-icon-danger {
  display: inline-flex;
  padding: 0.5rem;
  border-radius: 999px;
  background: var(--danger-glow);
  color: var(--danger);
}

.dialog-title {
  font-size: 1.1rem;
}

.dialog-description {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.dialog-body {
  padding: 0.5rem 1.25rem;
}

.dialog-footer {
  display: flex;
  gap: 0.75rem;
  padding: 1rem 1.25rem 1.25rem;
}

.dialog-footer-inline {
  flex-direction: row;
  justify-content: flex-end;
}

.dialog-footer-stacked {
  flex-direction: column-reverse;
}

.delete-preview {
  padding: 0.75rem;
  border: 1px solid var(--void-border);
  border-radius: 0.6rem;
  background: var(--surface);
}

.delete-preview-sender {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  margin-bottom: 0.5rem;
}

.avatar-placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border-radius: 999px;
  background: var(--accent-deep);
  font-weight: 600;
}

.delete-preview-name {
  font-size: var(--text-sm);
  font-weight: 600;
}

.delete-preview-time {
  color: var(--text-muted);
  font-size: var(--text-xs);
}

.delete-preview-content p {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  word-break: break-word;
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  bottom: 1.25rem;
  left: 50%;
  z-index: 200;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  transform: translateX(-50%);
}

.toast {
  padding: 0.6rem 1rem;
  border-radius: 0.5rem;
  font-size: var(--text-sm);
  box-shadow: 0 6px 20px rgba(0, 0, 0, 0.5);
  animation: toast-in var(--transition-normal);
}

.toast-success {
  background: var(--surface);
  border: 1px solid var(--success);
}

.toast-error {
  background: var(--surface);
  border: 1px solid var(--danger);
}

@keyframes toast-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

@media (max-width: 767px) {
  .message-container {
    max-width: 85%;
  }

  .message-scroll {
    padding: 0.75rem;
  }
}
"#;
