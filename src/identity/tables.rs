// * Static lookup tables: country languages and literal user-agent strings

use crate::config::constants::DEFAULT_ACCEPT_LANGUAGE;
use crate::identity::types::BrowserType;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

const COUNTRY_LANGUAGE_ENTRIES: &[(&str, &str)] = &[
    ("US", "en-US,en;q=0.9"),
    ("GB", "en-GB,en;q=0.9"),
    ("BR", "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7"),
    ("PT", "pt-PT,pt;q=0.9,en;q=0.8"),
    ("ES", "es-ES,es;q=0.9,en;q=0.8"),
    ("MX", "es-MX,es;q=0.9,en;q=0.8"),
    ("AR", "es-AR,es;q=0.9,en;q=0.8"),
    ("CO", "es-CO,es;q=0.9,en;q=0.8"),
    ("CL", "es-CL,es;q=0.9,en;q=0.8"),
    ("PE", "es-PE,es;q=0.9,en;q=0.8"),
    ("DE", "de-DE,de;q=0.9,en;q=0.8"),
    ("FR", "fr-FR,fr;q=0.9,en;q=0.8"),
    ("IT", "it-IT,it;q=0.9,en;q=0.8"),
    ("JP", "ja-JP,ja;q=0.9,en;q=0.8"),
    ("KR", "ko-KR,ko;q=0.9,en;q=0.8"),
    ("CN", "zh-CN,zh;q=0.9,en;q=0.8"),
    ("RU", "ru-RU,ru;q=0.9,en;q=0.8"),
    ("IN", "hi-IN,hi;q=0.9,en-IN;q=0.8,en;q=0.7"),
    ("CA", "en-CA,en;q=0.9,fr-CA;q=0.8"),
    ("AU", "en-AU,en;q=0.9"),
    ("NL", "nl-NL,nl;q=0.9,en;q=0.8"),
    ("BE", "nl-BE,nl;q=0.9,fr-BE;q=0.8,en;q=0.7"),
    ("PL", "pl-PL,pl;q=0.9,en;q=0.8"),
    ("SE", "sv-SE,sv;q=0.9,en;q=0.8"),
    ("NO", "nb-NO,nb;q=0.9,en;q=0.8"),
    ("DK", "da-DK,da;q=0.9,en;q=0.8"),
    ("FI", "fi-FI,fi;q=0.9,en;q=0.8"),
    ("TR", "tr-TR,tr;q=0.9,en;q=0.8"),
    ("SA", "ar-SA,ar;q=0.9,en;q=0.8"),
    ("AE", "ar-AE,ar;q=0.9,en;q=0.8"),
    ("IL", "he-IL,he;q=0.9,en;q=0.8"),
    ("TH", "th-TH,th;q=0.9,en;q=0.8"),
    ("VN", "vi-VN,vi;q=0.9,en;q=0.8"),
    ("ID", "id-ID,id;q=0.9,en;q=0.8"),
    ("MY", "ms-MY,ms;q=0.9,en;q=0.8"),
    ("PH", "fil-PH,fil;q=0.9,en-PH;q=0.8,en;q=0.7"),
    ("SG", "en-SG,en;q=0.9,zh-SG;q=0.8"),
    ("HK", "zh-HK,zh;q=0.9,en-HK;q=0.8,en;q=0.7"),
    ("TW", "zh-TW,zh;q=0.9,en;q=0.8"),
    ("ZA", "en-ZA,en;q=0.9,af;q=0.8"),
    ("NG", "en-NG,en;q=0.9"),
    ("EG", "ar-EG,ar;q=0.9,en;q=0.8"),
    ("UA", "uk-UA,uk;q=0.9,ru;q=0.8,en;q=0.7"),
    ("CZ", "cs-CZ,cs;q=0.9,en;q=0.8"),
    ("RO", "ro-RO,ro;q=0.9,en;q=0.8"),
    ("HU", "hu-HU,hu;q=0.9,en;q=0.8"),
    ("GR", "el-GR,el;q=0.9,en;q=0.8"),
    ("AT", "de-AT,de;q=0.9,en;q=0.8"),
    ("CH", "de-CH,de;q=0.9,fr-CH;q=0.8,en;q=0.7"),
    ("IE", "en-IE,en;q=0.9,ga;q=0.8"),
    ("NZ", "en-NZ,en;q=0.9"),
];

static COUNTRY_LANGUAGES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| COUNTRY_LANGUAGE_ENTRIES.iter().copied().collect());

const CHROME_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
];

const FIREFOX_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:120.0) Gecko/20100101 Firefox/120.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14.2; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
];

const SAFARI_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_2) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_1) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_6) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Mobile/15E148 Safari/604.1",
];

const EDGE_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36 Edg/119.0.0.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
];

// * Union of every table, in BrowserType::ALL order
static ALL_AGENTS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    BrowserType::ALL
        .iter()
        .flat_map(|b| user_agents(*b).iter().copied())
        .collect()
});

// * Returns the Accept-Language list for an ISO-3166 alpha-2 code.
// * Unknown codes get the en-US default.
pub fn language_for_country(code: &str) -> &'static str {
    let code = code.trim().to_ascii_uppercase();
    match COUNTRY_LANGUAGES.get(code.as_str()) {
        Some(&language) => language,
        None => {
            debug!(country_code = %code, "No language mapping, using default");
            DEFAULT_ACCEPT_LANGUAGE
        }
    }
}

pub fn supported_countries() -> impl Iterator<Item = &'static str> {
    COUNTRY_LANGUAGE_ENTRIES.iter().map(|(code, _)| *code)
}

pub fn user_agents(browser: BrowserType) -> &'static [&'static str] {
    match browser {
        BrowserType::Chrome => CHROME_AGENTS,
        BrowserType::Firefox => FIREFOX_AGENTS,
        BrowserType::Safari => SAFARI_AGENTS,
        BrowserType::Edge => EDGE_AGENTS,
    }
}

// * Uniform pick from one browser's table, or from all tables when none is given.
pub fn random_user_agent<R: Rng + ?Sized>(rng: &mut R, browser: Option<BrowserType>) -> &'static str {
    let pool: &[&'static str] = match browser {
        Some(b) => user_agents(b),
        None => ALL_AGENTS.as_slice(),
    };

    // * Tables are non-empty, the default is unreachable
    pool.choose(rng).copied().unwrap_or(CHROME_AGENTS[0])
}
