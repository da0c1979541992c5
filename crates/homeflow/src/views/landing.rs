//! Marketing landing page: hero, features, live demo and sign-up.

use leptos::*;

use super::icon::IconGlyph;
use super::layout::Route;
use super::layout::Shell;
use crate::home::model::ActionStatus;
use crate::home::model::Icon;
use crate::home::DemoSnapshot;
use crate::home::DemoStep;
use crate::home::StepPhase;

struct Feature {
    icon: Icon,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::MapPin,
        title: "Γεωγραφική Ανίχνευση",
        description: "Καταλαβαίνει πότε πλησιάζεις στο σπίτι μέσω GPS και Wi-Fi proximity",
    },
    Feature {
        icon: Icon::Thermometer,
        title: "Κλιματικός Έλεγχος",
        description: "Ενεργοποιεί A/C ή θέρμανση όταν είσαι στα 500μ από το σπίτι",
    },
    Feature {
        icon: Icon::Music,
        title: "Αυτόματο Ambience",
        description: "Παίζει μουσική, ανοίγει φώτα και δημιουργεί την ατμόσφαιρα που θες",
    },
    Feature {
        icon: Icon::Bath,
        title: "Wellness Automation",
        description: "Γεμίζει την μπανιέρα, κλείνει ρολά για την τέλεια στιγμή χαλάρωσης",
    },
    Feature {
        icon: Icon::Car,
        title: "Smart Departure",
        description: "Όταν φεύγεις: πλυντήριο, ρομπότ καθαρισμού, σβήσιμο φώτων",
    },
    Feature {
        icon: Icon::Brain,
        title: "AI Αυτομάθηση",
        description: "Μαθαίνει τις συνήθειές σου και προσαρμόζεται σε ώρες και εποχές",
    },
];

const INTEGRATIONS: [(&str, Icon); 4] = [
    ("Google Home", Icon::Home),
    ("Amazon Alexa", Icon::Smartphone),
    ("Samsung SmartThings", Icon::Wifi),
    ("Apple HomeKit", Icon::Shield),
];

const BENEFITS: [(Icon, &str, &str); 3] = [
    (Icon::Zap, "Instant Setup", "Εγκατάσταση σε 5 λεπτά"),
    (Icon::Shield, "100% Ασφαλές", "Κρυπτογράφηση τελευταίας γενιάς"),
    (Icon::Clock, "24/7 Support", "Υποστήριξη όλο το 24ωρο"),
];

fn phase_class(phase: StepPhase) -> &'static str {
    match phase {
        StepPhase::Completed => "timeline-step completed",
        StepPhase::Active => "timeline-step active",
        StepPhase::Dimmed => "timeline-step dimmed",
    }
}

fn action_class(status: ActionStatus) -> &'static str {
    match status {
        ActionStatus::Completed => "action completed",
        ActionStatus::Active => "action active",
        ActionStatus::Pending => "action pending",
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-copy">
                <span class="pill"><IconGlyph icon=Icon::Zap/>"AI-Powered Smart Home"</span>
                <h1>
                    <span class="gradient-text">"HomeFlow"</span>
                    <br/>
                    "Το Σπίτι που Ξέρει"
                </h1>
                <p class="lead">
                    "Το έξυπνο app που καταλαβαίνει πότε πλησιάζεις στο σπίτι και εκτελεί αυτόματα \
                     όλες τις εντολές που έχεις προγραμματίσει, χωρίς να κάνεις τίποτα."
                </p>
                <div class="hero-actions">
                    <a href="/dashboard" class="button primary">
                        <IconGlyph icon=Icon::Smartphone/>
                        "Ξεκίνα Τώρα"
                    </a>
                    <a href="#demo" class="button outline">
                        <IconGlyph icon=Icon::Home/>
                        "Δες Demo"
                    </a>
                </div>
                <div class="stats-row">
                    <Stat value="500+" label="Συσκευές"/>
                    <Stat value="AI" label="Αυτομάθηση"/>
                    <Stat value="24/7" label="Έλεγχος"/>
                </div>
            </div>
            <div class="hero-art">
                <div class="floating-card">"A/C: 25°C"</div>
                <div class="floating-card lower">
                    <IconGlyph icon=Icon::Wifi/>
                    "Σπίτι σε 5'"
                </div>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="section features">
            <div class="section-header">
                <span class="pill"><IconGlyph icon=Icon::Zap/>"Κύριες Λειτουργίες"</span>
                <h2>"Έξυπνο Σπίτι που " <span class="gradient-text">"Σκέφτεται"</span></h2>
                <p class="lead">
                    "Το HomeFlow συνδυάζει AI τεχνολογία με συσκευές smart home για να δημιουργήσει \
                     την τέλεια εμπειρία σπιτιού που προβλέπει τις ανάγκες σου."
                </p>
            </div>

            <div class="grid three">
                {FEATURES
                    .iter()
                    .map(|feature| view! {
                        <article class="card feature">
                            <div class="feature-icon"><IconGlyph icon=feature.icon/></div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </article>
                    })
                    .collect::<Vec<_>>()}
            </div>

            <h3 class="center">"Συμβατό με όλες τις πλατφόρμες"</h3>
            <div class="integrations">
                {INTEGRATIONS
                    .iter()
                    .map(|&(name, icon)| view! {
                        <div class="integration"><IconGlyph icon=icon/>{name}</div>
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="stats-row four">
                <Stat value="99.9%" label="Αξιοπιστία"/>
                <Stat value="<1s" label="Απόκριση"/>
                <Stat value="500+" label="Συσκευές"/>
                <Stat value="24/7" label="Υποστήριξη"/>
            </div>
        </section>
    }
}

#[component]
fn TimelineStep(step: DemoStep) -> impl IntoView {
    let DemoStep { phase, step } = step;
    view! {
        <li class=phase_class(phase)>
            <span class="timeline-dot"></span>
            <div class="card">
                <header class="timeline-header">
                    <h3><IconGlyph icon=Icon::Clock/>{step.time}</h3>
                    <span class="badge outline"><IconGlyph icon=Icon::MapPin/>{step.location}</span>
                    <span class="badge">{step.distance}</span>
                </header>
                <ul class="actions">
                    {step
                        .actions
                        .iter()
                        .map(|action| view! {
                            <li class=action_class(action.status)>
                                <IconGlyph icon=action.icon/>
                                <span>{action.text}</span>
                                {(action.status == ActionStatus::Completed)
                                    .then(|| view! { <IconGlyph icon=Icon::CheckCircle/> })}
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </li>
    }
}

#[component]
fn Demo(demo: DemoSnapshot) -> impl IntoView {
    let DemoSnapshot {
        playing,
        finished,
        steps,
        ..
    } = demo;

    view! {
        <section id="demo" class="section demo">
            <div class="section-header">
                <span class="pill accent"><IconGlyph icon=Icon::Clock/>"Ζωντανό Demo"</span>
                <h2>"Δες το " <span class="gradient-text">"HomeFlow"</span> " σε δράση"</h2>
                <p class="lead">
                    "Παρακολούθησε πώς το HomeFlow προετοιμάζει το σπίτι σου καθώς πλησιάζεις. \
                     Κάθε βήμα είναι αυτόματο και έξυπνο."
                </p>
                <form method="post" action="/demo/start">
                    <button type="submit" class="button accent" disabled=playing>
                        {if playing { "Εκτέλεση Demo..." } else { "Ξεκίνα Demo" }}
                    </button>
                </form>
            </div>

            <ol class="timeline">
                {steps
                    .into_iter()
                    .map(|step| view! { <TimelineStep step=step/> })
                    .collect::<Vec<_>>()}
            </ol>

            {finished.then(|| view! {
                <div class="banner success">
                    <IconGlyph icon=Icon::CheckCircle/>
                    "Το σπίτι σου είναι έτοιμο! Καλώς ήρθες στο μέλλον. 🚀"
                </div>
            })}
        </section>
    }
}

#[component]
fn CallToAction(signed_up: bool) -> impl IntoView {
    let signup = if signed_up {
        view! {
            <div class="notice">
                <IconGlyph icon=Icon::Star/>
                <h3>"Ευχαριστούμε!"</h3>
                <p>"Θα σου στείλουμε τις πρώτες πληροφορίες σύντομα."</p>
            </div>
        }
        .into_view()
    } else {
        view! {
            <form method="post" action="/signup" class="signup">
                <input type="email" name="email" placeholder="Το email σου" required=true/>
                <button type="submit" class="button primary">"Κάνε Εγγραφή Δωρεάν"</button>
                <p class="fine-print">"Καμία δέσμευση • Ακύρωση ανά πάσα στιγμή"</p>
            </form>
        }
        .into_view()
    };

    view! {
        <section id="signup" class="section cta">
            <span class="pill"><IconGlyph icon=Icon::Star/>"Έτοιμος για το Μέλλον;"</span>
            <h2>"Κάνε το Σπίτι σου " <span class="gradient-text">"Έξυπνο"</span></h2>
            <p class="lead">
                "Γίνε μέλος των πρώτων που θα ζήσουν την εμπειρία του αυτόματου σπιτιού. \
                 Ξεκίνα δωρεάν και ανακάλυψε πώς η τεχνολογία μπορεί να αλλάξει την καθημερινότητά σου."
            </p>

            <div class="card signup-card">{signup}</div>

            <div class="grid three">
                {BENEFITS
                    .iter()
                    .map(|&(icon, title, description)| view! {
                        <div class="benefit">
                            <IconGlyph icon=icon/>
                            <div>
                                <div class="benefit-title">{title}</div>
                                <div class="benefit-description">{description}</div>
                            </div>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn LandingView(
    demo: DemoSnapshot,
    refresh_secs: Option<u64>,
    signed_up: bool,
) -> impl IntoView {
    view! {
        <Shell title="Αρχική" route=Route::Home refresh_secs=refresh_secs>
            <Hero/>
            <Features/>
            <Demo demo=demo/>
            <CallToAction signed_up=signed_up/>
        </Shell>
    }
}
