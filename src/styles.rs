/// Theme shared by every page. Page-specific rules live next to their components.
pub const GLOBAL: &str = r#"
:root {
    --sand-50: #faf9f7;
    --sand-100: #f5f3ef;
    --sand-200: #e8e4dd;
    --sand-300: #d4cec3;
    --sand-400: #b8b0a2;
    --sand-500: #9c9283;
    --sand-800: #595248;
    --ink: #1a1915;
    --ink-light: #2d2b26;
    --ink-muted: #6b6556;
    --font-sans: 'Inter', system-ui, sans-serif;
    --font-mono: 'JetBrains Mono', monospace;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--sand-50);
    color: var(--ink);
    font-family: var(--font-sans);
    -webkit-font-smoothing: antialiased;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    width: 100%;
}

.container.narrow {
    max-width: 800px;
}

.section {
    padding: 6rem 1.5rem;
}

.section.dark {
    background: var(--ink);
    color: var(--sand-100);
}

.eyebrow {
    font-family: var(--font-mono);
    font-size: 13px;
    letter-spacing: 0.1em;
    color: var(--ink-muted);
    margin: 0 0 0.75rem;
}

.dark .eyebrow {
    color: var(--sand-500);
}

.display {
    font-size: clamp(3rem, 8vw, 7rem);
    line-height: 0.95;
    letter-spacing: -0.03em;
    font-weight: 700;
    margin: 0;
}

.headline {
    font-size: clamp(1.75rem, 4vw, 3.25rem);
    line-height: 1.1;
    letter-spacing: -0.02em;
    font-weight: 700;
    margin: 0;
    text-wrap: balance;
}

.rule {
    height: 1px;
    background: var(--sand-300);
    margin-bottom: 4rem;
}

.split {
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
}

@media (min-width: 1024px) {
    .split {
        grid-template-columns: 4fr 7fr;
        gap: 4rem;
    }
}

.muted {
    color: var(--ink-muted);
    line-height: 1.75;
}

.dark .muted {
    color: var(--sand-400);
}

.reveal {
    opacity: 0;
    transform: translateY(1.5rem);
    transition: opacity 700ms ease, transform 700ms ease;
}

.reveal.is-visible {
    opacity: 1;
    transform: translateY(0);
}

.btn-primary {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    font-family: var(--font-mono);
    font-size: 13px;
    letter-spacing: 0.1em;
    color: var(--sand-50);
    background: var(--ink);
    padding: 1rem 2rem;
    transition: background-color 300ms ease;
}

.btn-primary:hover {
    background: var(--ink-light);
}

.link-underline {
    background-image: linear-gradient(currentColor, currentColor);
    background-size: 0% 1px;
    background-position: 0 100%;
    background-repeat: no-repeat;
    transition: background-size 300ms ease;
}

.link-underline:hover {
    background-size: 100% 1px;
}

.icon {
    width: 1rem;
    height: 1rem;
    flex-shrink: 0;
}

@keyframes fade-up {
    from {
        opacity: 0;
        transform: translateY(24px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

.fade-up { animation: fade-up 0.9s ease-out both; }
.fade-up-1 { animation: fade-up 0.9s ease-out 0.15s both; }
.fade-up-2 { animation: fade-up 0.9s ease-out 0.3s both; }
.fade-up-3 { animation: fade-up 0.9s ease-out 0.45s both; }
.fade-up-4 { animation: fade-up 0.9s ease-out 0.6s both; }

@media (prefers-reduced-motion: reduce) {
    .reveal,
    .fade-up,
    .fade-up-1,
    .fade-up-2,
    .fade-up-3,
    .fade-up-4 {
        animation: none;
        transition: none;
        opacity: 1;
        transform: none;
    }
}
"#;
