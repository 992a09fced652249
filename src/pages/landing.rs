use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::hud_card::HudCard;
use crate::components::icons::{Icon, IconKind};
use crate::components::navbar::Navbar;
use crate::components::section_title::SectionTitle;
use crate::components::tactical_button::TacticalButton;
use crate::scroll::{fade_in_opacity, use_scroll_progress};

pub const PROBLEM_ID: &str = "problem";
pub const SOLUTION_ID: &str = "solution";
pub const CASES_ID: &str = "cases";
pub const CONTACT_ID: &str = "contact";

struct ProblemCard {
    tag: &'static str,
    icon: IconKind,
    heading: &'static str,
    body: &'static str,
    dimmed: bool,
}

const PROBLEM_CARDS: [ProblemCard; 3] = [
    ProblemCard {
        tag: "ERROR DETECTADO: 01",
        icon: IconKind::Users,
        heading: "Tráfico sin Filtro",
        body: "Pagas anuncios para que todo el mundo te vea. Tu puerta de entrada está rota y dejas pasar a cualquiera.",
        dimmed: false,
    },
    ProblemCard {
        tag: "ERROR DETECTADO: 02",
        icon: IconKind::Activity,
        heading: "Desperdicio Operativo",
        body: "Tu equipo pierde 20 horas/semana respondiendo a gente sin dinero. Los \"likes\" no pagan facturas.",
        dimmed: false,
    },
    ProblemCard {
        tag: "ERROR DETECTADO: 03",
        icon: IconKind::ShieldCheck,
        heading: "Fuga de Ballenas",
        body: "Los prospectos reales se cansan de esperar en la fila y se van con tu competencia más ágil.",
        dimmed: true,
    },
];

struct SolutionStep {
    title: &'static str,
    desc: &'static str,
    icon: IconKind,
}

const SOLUTION_STEPS: [SolutionStep; 3] = [
    SolutionStep {
        title: "GANCHO EDUCATIVO",
        desc: "El prospecto no siente que le vendes. Siente que le ayudas con un diagnóstico.",
        icon: IconKind::Zap,
    },
    SolutionStep {
        title: "LEAD SCORING IA",
        desc: "Nuestra IA analiza: Presupuesto, Urgencia y Dolor en tiempo real.",
        icon: IconKind::BarChart,
    },
    SolutionStep {
        title: "BIFURCACIÓN",
        desc: "Curiosos -> Nurturing. Compradores -> Agenda directa.",
        icon: IconKind::Target,
    },
];

/// (label, value, highlighted)
const LEAD_FIELDS: [(&str, &str, bool); 4] = [
    ("Nombre:", "Carlos R.", false),
    ("Score:", "95/100", true),
    ("Presupuesto:", "Alto ($2,000+)", false),
    ("Urgencia:", "Inmediata", false),
];

const SECTORS: [&str; 4] = [
    "SALUD & ESTÉTICA",
    "HOME SERVICES",
    "HIGH TICKET COACHING",
    "REAL ESTATE",
];

/// Seconds each problem card waits after the previous one.
const CARD_STAGGER_SECS: f64 = 0.1;

fn card_delay(index: usize) -> f64 {
    CARD_STAGGER_SECS * (index + 1) as f64
}

#[function_component(Hero)]
fn hero() -> Html {
    let entered = use_state_eq(|| false);

    // Flip on the next tick so the entrance transition runs once after mount.
    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(16, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <section class="hero">
            <div class="hero-inner">
                <div class={classes!("hero-content", (*entered).then_some("entered"))}>
                    <h1 class="hero-title">
                        {"Deja de perseguir "}<br />
                        <span class="text-stroke">{"a Curiosos"}</span>
                    </h1>

                    <p class="hero-lead">
                        {"Instalamos un "}
                        <strong>{"Sistema de Filtrado con IA"}</strong>
                        {" que llena la agenda de tu equipo comercial solo con prospectos calificados."}
                    </p>

                    <div class="hero-bullets">
                        <span><span class="mark-no">{"✗"}</span>{" SIN LEADS FRÍOS"}</span>
                        <span><span class="mark-no">{"✗"}</span>{" SIN PERSEGUIR"}</span>
                        <span><span class="mark-yes">{"✓"}</span>{" SOLO FILTRADOS"}</span>
                    </div>

                    <div class="hero-cta">
                        <TacticalButton class={classes!("btn-large")}>
                            {"[ CONSTRUIR MI FILTRO ]"}
                        </TacticalButton>
                    </div>
                    <p class="hero-note">{"// ANÁLISIS GRATUITO DE TU PROCESO ACTUAL"}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(ProblemSection)]
fn problem_section() -> Html {
    html! {
        <section id={PROBLEM_ID} class="section section-problem">
            <div class="container">
                <SectionTitle
                    title="La 'Trampa del Volumen'"
                    subtitle="Por qué más leads (basura) te están haciendo perder dinero."
                />

                <div class="card-grid">
                    { for PROBLEM_CARDS.iter().enumerate().map(|(i, card)| html! {
                        <HudCard title={card.tag} delay={card_delay(i)}>
                            <Icon
                                kind={card.icon}
                                size={48}
                                stroke_width={1.0}
                                class={classes!("card-icon", card.dimmed.then_some("dimmed"))}
                            />
                            <h3>{ card.heading }</h3>
                            <p class="muted">{ card.body }</p>
                        </HudCard>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(SolutionSection)]
fn solution_section() -> Html {
    html! {
        <section id={SOLUTION_ID} class="section section-solution">
            <div class="container">
                <SectionTitle title="Protocolo Smart Quiz" />

                <div class="steps">
                    <div class="steps-line"></div>
                    { for SOLUTION_STEPS.iter().map(|step| html! {
                        <div class="step">
                            <div class="step-badge">
                                <Icon kind={step.icon} size={32} class={classes!("step-icon")} />
                                <div class="step-ping"></div>
                            </div>
                            <h3>{ step.title }</h3>
                            <p class="muted">{ step.desc }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(CasesSection)]
fn cases_section() -> Html {
    let section_ref = use_node_ref();
    let progress = use_scroll_progress(section_ref.clone());
    let opacity = fade_in_opacity(progress);

    html! {
        <section id={CASES_ID} class="section section-cases" ref={section_ref}>
            <div class="container container-narrow cases-layout">
                <div class="cases-copy">
                    <h2>
                        {"No recibes \"Datos\". "}<br />
                        {"Recibes "}<span class="accent">{"INTELIGENCIA."}</span>
                    </h2>
                    <p class="muted lead">
                        {"Imagina que tu equipo recibiera ESTO cada mañana en lugar de una lista de teléfonos fantasma."}
                    </p>
                    <ul class="cases-list">
                        <li><span class="square"></span>{"SCORE DE CALIDAD > 90"}</li>
                        <li><span class="square"></span>{"INTENCIÓN DE COMPRA: ALTA"}</li>
                    </ul>
                </div>

                <div class="cases-card-wrap">
                    <div class="lead-card" style={format!("opacity: {opacity};")}>
                        <div class="lead-card-header">
                            <div class="lead-card-who">
                                <div class="lead-card-icon">
                                    <Icon kind={IconKind::Target} size={20} />
                                </div>
                                <div>
                                    <div class="lead-card-title">{"NUEVA OPORTUNIDAD"}</div>
                                    <div class="lead-card-time">{"Hace 2 minutos"}</div>
                                </div>
                            </div>
                            <div class="lead-card-badge">{"HOT LEAD 🔥"}</div>
                        </div>

                        <div class="lead-card-fields">
                            { for LEAD_FIELDS.iter().map(|(label, value, highlighted)| html! {
                                <div class="lead-field">
                                    <span class="muted">{ *label }</span>
                                    <span class={classes!(highlighted.then_some("score"))}>{ *value }</span>
                                </div>
                            }) }
                        </div>

                        <div class="lead-card-footer">
                            <button class="lead-card-button">{"Ver Ficha Completa"}</button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <section id={CONTACT_ID} class="section section-contact">
            <div class="container container-narrow centered">
                <h2 class="sectors-title">{"SECTORES COMPATIBLES"}</h2>
                <div class="sectors">
                    { for SECTORS.iter().map(|sector| html! {
                        <div class="sector">{ *sector }</div>
                    }) }
                </div>

                <div class="divider"></div>

                <div class="offer">
                    <h2 class="offer-title">
                        {"TU SISTEMA EN "}<span class="accent">{"30 DÍAS"}</span>
                    </h2>
                    <p class="muted offer-lead">
                        {"Si tienes una oferta validada y presupuesto, nosotros ponemos el motor."}
                    </p>
                    <TacticalButton full_width={true} class={classes!("btn-offer")}>
                        {"QUIERO MI AUDITORÍA DE VENTAS"}
                    </TacticalButton>
                    <p class="muted offer-note">{"Plazas limitadas por capacidad operativa."}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-status">
                <Icon kind={IconKind::Lock} size={14} />
                <span>{"SECURE CONNECTION ESTABLISHED"}</span>
            </div>
            <p>{"© 2025 CLICK TÁCTICO. SYSTEM OPERATIONS NORMAL."}</p>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <div class="bg-grid-pattern"></div>
            <div class="scanlines"></div>

            <Navbar />
            <Hero />
            <ProblemSection />
            <SolutionSection />
            <CasesSection />
            <ContactSection />
            <Footer />

            <style>
                {r#"
                :root {
                    --color-void: #0a0b0f;
                    --color-void-dark: #050608;
                    --color-laser-red: #ff2a2a;
                    --color-hud-gray: #2a2d38;
                    --color-hud-text: #8b8fa3;
                    --font-mono: "JetBrains Mono", ui-monospace, SFMono-Regular, Menlo, monospace;
                    --font-display: "Rajdhani", "Inter", system-ui, sans-serif;
                }
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: var(--color-void);
                    color: #ffffff;
                    font-family: var(--font-display);
                }
                ::selection {
                    background: var(--color-laser-red);
                    color: #ffffff;
                }
                .landing-page {
                    min-height: 100vh;
                    background: var(--color-void);
                    padding-bottom: 5rem;
                    overflow-x: hidden;
                }
                .bg-grid-pattern {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    background-image:
                        linear-gradient(rgba(42, 45, 56, 0.25) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(42, 45, 56, 0.25) 1px, transparent 1px);
                    background-size: 40px 40px;
                }
                .scanlines {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    pointer-events: none;
                    background: repeating-linear-gradient(
                        to bottom,
                        rgba(255, 255, 255, 0.02) 0,
                        rgba(255, 255, 255, 0.02) 1px,
                        transparent 1px,
                        transparent 3px
                    );
                }
                .container {
                    max-width: 72rem;
                    margin: 0 auto;
                    position: relative;
                }
                .container-narrow {
                    max-width: 56rem;
                }
                .centered {
                    text-align: center;
                }
                .muted {
                    color: var(--color-hud-text);
                }
                .accent {
                    color: var(--color-laser-red);
                }
                h1, h2, h3 {
                    margin: 0;
                    font-weight: 700;
                }

                .btn-tactical {
                    position: relative;
                    padding: 1rem 2rem;
                    background: var(--color-laser-red);
                    color: #ffffff;
                    border: none;
                    font-family: var(--font-mono);
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    cursor: pointer;
                    clip-path: polygon(16px 0, 100% 0, 100% calc(100% - 16px), calc(100% - 16px) 100%, 0 100%, 0 16px);
                    box-shadow: 0 0 30px rgba(255, 42, 42, 0.35);
                    transition: transform 0.2s, box-shadow 0.2s;
                }
                .btn-tactical:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 0 45px rgba(255, 42, 42, 0.55);
                }
                .btn-tactical.full-width {
                    width: 100%;
                }
                .btn-tactical-label {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                }

                .hud-panel {
                    position: relative;
                    padding: 1.5rem;
                    background: rgba(20, 21, 28, 0.7);
                    border: 1px solid var(--color-hud-gray);
                }
                .hud-corners::before,
                .hud-corners::after {
                    content: "";
                    position: absolute;
                    width: 12px;
                    height: 12px;
                    border-color: var(--color-laser-red);
                    border-style: solid;
                }
                .hud-corners::before {
                    top: -1px;
                    left: -1px;
                    border-width: 2px 0 0 2px;
                }
                .hud-corners::after {
                    bottom: -1px;
                    right: -1px;
                    border-width: 0 2px 2px 0;
                }
                .hud-tag {
                    position: absolute;
                    top: -0.75rem;
                    left: 1rem;
                    padding: 0 0.5rem;
                    background: var(--color-void);
                    color: var(--color-laser-red);
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    border: 1px solid var(--color-hud-gray);
                }

                .section-title {
                    margin-bottom: 3rem;
                }
                .section-kicker {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .kicker-line {
                    height: 1px;
                    width: 3rem;
                    background: var(--color-laser-red);
                }
                .kicker-text {
                    color: var(--color-laser-red);
                    font-family: var(--font-mono);
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                }
                .section-title h2 {
                    font-size: 1.875rem;
                    text-transform: uppercase;
                    line-height: 1.2;
                    margin-bottom: 1rem;
                }
                .section-subtitle {
                    color: var(--color-hud-text);
                    font-size: 1.125rem;
                    font-weight: 300;
                    max-width: 42rem;
                }

                .hero {
                    position: relative;
                    z-index: 10;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    padding: 8rem 1rem 0;
                    box-sizing: border-box;
                }
                .hero-inner {
                    max-width: 72rem;
                    width: 100%;
                    margin: 0 auto;
                }
                .hero-content {
                    text-align: center;
                    margin-top: 3rem;
                    opacity: 0;
                    transform: scale(0.9);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .hero-content.entered {
                    opacity: 1;
                    transform: scale(1);
                }
                .hero-title {
                    font-size: 2.25rem;
                    text-transform: uppercase;
                    line-height: 0.9;
                    letter-spacing: -0.05em;
                    margin-bottom: 1.5rem;
                }
                .text-stroke {
                    -webkit-text-stroke: 1px rgba(255, 255, 255, 0.6);
                    color: transparent;
                    background: linear-gradient(to bottom, #ffffff, #6b7280);
                    -webkit-background-clip: text;
                    background-clip: text;
                }
                .hero-lead {
                    font-size: 1.125rem;
                    color: var(--color-hud-text);
                    max-width: 48rem;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                    font-weight: 300;
                }
                .hero-lead strong {
                    color: #ffffff;
                }
                .hero-bullets {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                    font-family: var(--font-mono);
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .mark-no {
                    color: var(--color-laser-red);
                }
                .mark-yes {
                    color: #22c55e;
                }
                .hero-cta {
                    display: flex;
                    justify-content: center;
                }
                .btn-large {
                    font-size: 1.125rem;
                    padding: 1.5rem 3rem;
                }
                .hero-note {
                    margin-top: 1rem;
                    font-size: 0.75rem;
                    font-family: var(--font-mono);
                    color: var(--color-hud-text);
                }

                .section {
                    position: relative;
                    z-index: 10;
                    padding: 6rem 1rem;
                }
                .section-problem {
                    border-top: 1px solid var(--color-hud-gray);
                    background: var(--color-void);
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                .card-icon {
                    color: var(--color-laser-red);
                    margin-bottom: 1.5rem;
                }
                .card-icon.dimmed {
                    opacity: 0.5;
                }
                .hud-panel h3 {
                    font-size: 1.25rem;
                    margin-bottom: 1rem;
                }

                .section-solution {
                    background: var(--color-void-dark);
                    overflow: hidden;
                }
                .steps {
                    position: relative;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    margin-top: 5rem;
                }
                .steps-line {
                    display: none;
                    position: absolute;
                    top: 3rem;
                    left: 0;
                    width: 100%;
                    height: 2px;
                    background: var(--color-hud-gray);
                    z-index: -1;
                }
                .step {
                    position: relative;
                    background: var(--color-void-dark);
                    padding-top: 2rem;
                    text-align: center;
                }
                .step-badge {
                    position: relative;
                    width: 6rem;
                    height: 6rem;
                    margin: 0 auto 1.5rem;
                    background: var(--color-void);
                    border: 1px solid var(--color-hud-gray);
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .step-icon {
                    color: #ffffff;
                }
                .step-ping {
                    position: absolute;
                    inset: 0;
                    border: 1px solid var(--color-laser-red);
                    border-radius: 9999px;
                    opacity: 0.2;
                    animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                }
                .step h3 {
                    font-size: 1.25rem;
                    margin-bottom: 0.5rem;
                }
                .step p {
                    font-size: 0.875rem;
                }

                .section-cases {
                    padding: 8rem 1rem;
                }
                .cases-layout {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 3rem;
                }
                .cases-copy,
                .cases-card-wrap {
                    flex: 1;
                    width: 100%;
                }
                .cases-copy h2 {
                    font-size: 2.25rem;
                    margin-bottom: 1.5rem;
                }
                .cases-copy .lead {
                    font-size: 1.125rem;
                    margin-bottom: 2rem;
                }
                .cases-list {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    font-family: var(--font-mono);
                    font-size: 0.875rem;
                    color: var(--color-hud-text);
                }
                .cases-list li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .square {
                    width: 0.5rem;
                    height: 0.5rem;
                    background: var(--color-laser-red);
                }
                .lead-card {
                    position: relative;
                    overflow: hidden;
                    background: #1a1b22;
                    border-left: 4px solid var(--color-laser-red);
                    border-radius: 0 0.5rem 0.5rem 0;
                    padding: 1.5rem;
                    box-shadow: 0 0 50px rgba(0, 0, 0, 0.5);
                }
                .lead-card-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 1.5rem;
                    padding-bottom: 1rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .lead-card-who {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .lead-card-icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.25rem;
                    background: rgba(20, 83, 45, 0.3);
                    color: #22c55e;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .lead-card-title {
                    font-weight: 700;
                }
                .lead-card-time {
                    font-size: 0.75rem;
                    color: var(--color-hud-text);
                }
                .lead-card-badge {
                    padding: 0.25rem 0.5rem;
                    background: var(--color-laser-red);
                    color: #ffffff;
                    font-size: 0.75rem;
                    font-weight: 700;
                    border-radius: 0.25rem;
                }
                .lead-card-fields {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    font-family: var(--font-mono);
                    font-size: 0.875rem;
                }
                .lead-field {
                    display: flex;
                    justify-content: space-between;
                }
                .lead-field .score {
                    color: #4ade80;
                }
                .lead-card-footer {
                    margin-top: 1.5rem;
                    padding-top: 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .lead-card-button {
                    width: 100%;
                    padding: 0.5rem 0;
                    background: rgba(255, 255, 255, 0.05);
                    color: #ffffff;
                    border: none;
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    cursor: pointer;
                    transition: background 0.2s;
                }
                .lead-card-button:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                .section-contact {
                    background: var(--color-void-dark);
                    border-top: 1px solid var(--color-hud-gray);
                }
                .sectors-title {
                    font-size: 1.875rem;
                    margin-bottom: 3rem;
                }
                .sectors {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                    font-family: var(--font-mono);
                    font-size: 0.875rem;
                    color: var(--color-hud-text);
                }
                .sector {
                    padding: 1rem;
                    border: 1px solid var(--color-hud-gray);
                    cursor: crosshair;
                    transition: border-color 0.2s;
                }
                .sector:hover {
                    border-color: var(--color-laser-red);
                }
                .divider {
                    margin-top: 8rem;
                    height: 1px;
                    width: 100%;
                    background: linear-gradient(to right, transparent, var(--color-laser-red), transparent);
                    opacity: 0.2;
                }
                .offer {
                    margin-top: 5rem;
                }
                .offer-title {
                    font-size: 3rem;
                    margin-bottom: 2rem;
                }
                .offer-lead {
                    font-size: 1.25rem;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }
                .btn-offer {
                    max-width: 28rem;
                    font-size: 1.25rem;
                    padding: 1.5rem 2rem;
                }
                .offer-note {
                    margin-top: 1.5rem;
                    font-size: 0.875rem;
                    opacity: 0.6;
                }

                .site-footer {
                    position: relative;
                    z-index: 10;
                    padding: 3rem 1rem;
                    border-top: 1px solid var(--color-hud-gray);
                    text-align: center;
                    color: var(--color-hud-text);
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                }
                .footer-status {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }

                @keyframes ping {
                    75%, 100% { transform: scale(2); opacity: 0; }
                }
                @keyframes pulse {
                    50% { opacity: 0.5; }
                }

                @media (min-width: 768px) {
                    .hero { padding-top: 10rem; }
                    .hero-content { margin-top: 0; }
                    .hero-title { font-size: 4.5rem; }
                    .hero-lead { font-size: 1.5rem; }
                    .hero-bullets { flex-direction: row; font-size: 1rem; }
                    .btn-large { font-size: 1.25rem; }
                    .section-problem { padding: 8rem 1rem; }
                    .section-title { margin-bottom: 5rem; }
                    .section-title h2 { font-size: 3rem; }
                    .section-subtitle { font-size: 1.25rem; }
                    .card-grid { grid-template-columns: repeat(3, 1fr); }
                    .steps { grid-template-columns: repeat(3, 1fr); }
                    .steps-line { display: block; }
                    .cases-layout { flex-direction: row; }
                    .sectors { grid-template-columns: repeat(4, 1fr); }
                    .offer-title { font-size: 3.75rem; }
                }
                @media (min-width: 1024px) {
                    .hero-title { font-size: 6rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::navbar::NAV_ITEMS;

    #[test]
    fn every_nav_anchor_has_a_section() {
        let section_ids = [PROBLEM_ID, SOLUTION_ID, CASES_ID, CONTACT_ID];
        assert_eq!(NAV_ITEMS.len(), section_ids.len());
        for (item, id) in NAV_ITEMS.iter().zip(section_ids) {
            assert_eq!(item.href, format!("#{id}"), "{} points nowhere", item.label);
        }
    }

    #[test]
    fn problem_cards_reveal_in_sequence() {
        let delays: Vec<f64> = (0..PROBLEM_CARDS.len()).map(card_delay).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
        assert!((delays[0] - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn lead_card_highlights_only_the_score() {
        let highlighted: Vec<_> = LEAD_FIELDS.iter().filter(|(_, _, h)| *h).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].0, "Score:");
    }
}
