//! English locale data.

use super::{
    DomainLocale, EmailLocale, GenderLocale, GenderPools, InternetLocale, JobTitleLocale, Locale,
    NamedUnits, PersonLocale, SyntaxLocale, TimeLocale, WordLocale,
};

const MALE_FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven", "Paul",
    "Andrew", "Joshua", "Kenneth", "Kevin", "Brian", "George", "Timothy", "Ronald", "Edward",
    "Jason", "Jeffrey", "Ryan", "Jacob", "Gary", "Nicholas", "Eric", "Jonathan", "Stephen",
    "Larry", "Justin", "Scott", "Brandon", "Benjamin", "Samuel", "Gregory", "Alexander", "Frank",
    "Patrick", "Raymond", "Jack", "Dennis", "Jerry",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Lisa", "Nancy", "Betty", "Margaret", "Sandra", "Ashley", "Kimberly", "Emily",
    "Donna", "Michelle", "Carol", "Amanda", "Dorothy", "Melissa", "Deborah", "Stephanie",
    "Rebecca", "Sharon", "Laura", "Cynthia", "Kathleen", "Amy", "Angela", "Shirley", "Anna",
    "Brenda", "Pamela", "Emma", "Nicole", "Helen", "Samantha", "Katherine", "Christine",
    "Debra", "Rachel", "Carolyn", "Janet", "Catherine", "Maria", "Heather",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts", "O'Connor", "O'Brien",
];

const GENDER_BINARY: &[&str] = &["Female", "Male"];

const GENDER_POOL: &[&str] = &[
    "Asexual",
    "Female to male trans man",
    "Female to male transgender man",
    "Female to male transsexual man",
    "F2M",
    "Gender neutral",
    "Hermaphrodite",
    "Intersex man",
    "Intersex person",
    "Intersex woman",
    "Male to female trans woman",
    "Male to female transgender woman",
    "Male to female transsexual woman",
    "Man",
    "M2F",
    "Polygender",
    "T* man",
    "T* woman",
    "Two* person",
    "Two-spirit person",
    "Woman",
    "Agender",
    "Androgyne",
    "Androgynes",
    "Androgynous",
    "Bigender",
    "Cis",
    "Cis Female",
    "Cis Male",
    "Cis Man",
    "Cis Woman",
    "Cisgender",
    "Cisgender Female",
    "Cisgender Male",
    "Cisgender Man",
    "Cisgender Woman",
    "Female to Male",
    "FTM",
    "Gender Fluid",
    "Gender Nonconforming",
    "Gender Questioning",
    "Gender Variant",
    "Genderqueer",
    "Intersex",
    "Male to Female",
    "MTF",
    "Neither",
    "Neutrois",
    "Non-binary",
    "Other",
    "Pangender",
    "Trans",
    "Trans Female",
    "Trans Male",
    "Trans Man",
    "Trans Person",
    "Trans*Female",
    "Trans*Male",
    "Trans*Man",
    "Trans*Person",
    "Trans*Woman",
    "Transexual",
    "Transexual Female",
    "Transexual Male",
    "Transexual Man",
    "Transexual Person",
    "Transexual Woman",
    "Transgender Female",
    "Transgender Person",
    "Transmasculine",
    "Two-spirit",
];

const PREFIX_GENERAL: &[&str] = &["Mr.", "Mrs.", "Ms.", "Miss", "Dr."];
const PREFIX_FEMALE: &[&str] = &["Mrs.", "Ms.", "Miss"];
const PREFIX_MALE: &[&str] = &["Mr.", "Dr."];

const SUFFIXES: &[&str] = &[
    "Jr.", "Sr.", "I", "II", "III", "IV", "V", "MD", "DDS", "PhD", "DVM",
];

const JOB_DESCRIPTORS: &[&str] = &[
    "Lead", "Senior", "Direct", "Corporate", "Dynamic", "Future", "Product", "National",
    "Regional", "District", "Central", "Global", "Customer", "Investor", "Dynamic",
    "International", "Legacy", "Forward", "Internal", "Human", "Chief", "Principal",
];

const JOB_LEVELS: &[&str] = &[
    "Solutions", "Program", "Brand", "Security", "Research", "Marketing", "Directives",
    "Implementation", "Integration", "Functionality", "Response", "Paradigm", "Tactics",
    "Identity", "Markets", "Group", "Division", "Applications", "Optimization", "Operations",
    "Infrastructure", "Intranet", "Communications", "Web", "Branding", "Quality", "Assurance",
    "Mobility", "Accounts", "Data", "Creative", "Configuration", "Accountability",
    "Interactions", "Factors", "Usability", "Metrics",
];

const JOB_TYPES: &[&str] = &[
    "Supervisor", "Associate", "Executive", "Liaison", "Officer", "Manager", "Engineer",
    "Specialist", "Director", "Coordinator", "Administrator", "Architect", "Analyst",
    "Designer", "Planner", "Orchestrator", "Technician", "Developer", "Producer", "Consultant",
    "Assistant", "Facilitator", "Agent", "Representative", "Strategist",
];

const AVATARS: &[&str] = &[
    "jarjan/128.jpg", "mahdif/128.jpg", "sprayaga/128.jpg", "ruzinav/128.jpg",
    "Skyhartman/128.jpg", "moscoz/128.jpg", "kurafire/128.jpg", "91bilal/128.jpg",
    "igorgarybaldi/128.jpg", "calebogden/128.jpg", "malykhinv/128.jpg", "joelhelin/128.jpg",
    "kushsolitary/128.jpg", "coreyweb/128.jpg", "snowshade/128.jpg", "areus/128.jpg",
];

const FREE_EMAIL: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com"];
const EXAMPLE_EMAIL: &[&str] = &["example.org", "example.com", "example.net"];

const DOMAIN_SUFFIXES: &[&str] = &[
    "com", "biz", "info", "name", "net", "org", "io", "dev", "app", "co",
];

const ADJECTIVES: &[&str] = &[
    "able", "ample", "bold", "brave", "bright", "calm", "careful", "cheerful", "clean", "clever",
    "cool", "curious", "daring", "eager", "early", "easy", "fair", "fancy", "fast", "fine",
    "gentle", "glad", "grand", "great", "happy", "honest", "humble", "jolly", "keen", "kind",
    "lively", "lucky", "mighty", "modern", "neat", "nice", "noble", "proud", "quick", "quiet",
    "rapid", "rare", "ready", "rich", "shiny", "smart", "solid", "swift", "tidy", "vivid",
    "warm", "wise", "young", "zesty",
];

const ADVERBS: &[&str] = &[
    "abnormally", "absentmindedly", "accidentally", "actually", "adventurously", "afterwards",
    "almost", "always", "annually", "anxiously", "arrogantly", "awkwardly", "bashfully",
    "beautifully", "bitterly", "bleakly", "blindly", "blissfully", "boastfully", "boldly",
    "bravely", "briefly", "brightly", "briskly", "broadly", "busily", "calmly", "carefully",
    "cautiously", "certainly", "cheerfully", "clearly", "cleverly", "closely", "quickly",
    "quietly", "rarely", "slowly", "softly", "well",
];

const CONJUNCTIONS: &[&str] = &[
    "after", "although", "and", "as", "because", "before", "but", "for", "if", "nor", "once",
    "or", "since", "so", "than", "that", "though", "till", "unless", "until", "when", "whenever",
    "where", "whereas", "wherever", "whether", "while", "yet",
];

const INTERJECTIONS: &[&str] = &[
    "yuck", "oh", "phooey", "blah", "boo", "whoa", "yowza", "huzzah", "boohoo", "fooey",
    "geez", "pfft", "ew", "ah", "yum", "brr", "hm", "yahoo", "aha", "woot", "drat", "gah",
    "meh", "psst", "aw", "ugh", "yippee", "eek", "gee", "bah", "gadzooks", "duh", "ha", "mmm",
    "ouch", "phew", "ack", "uh-huh", "gosh", "hmph", "pish", "zowie", "er", "ick", "oof", "um",
];

const NOUNS: &[&str] = &[
    "account", "action", "airport", "album", "angle", "apple", "archive", "badge", "balance",
    "basket", "battery", "beach", "bicycle", "bottle", "bridge", "bucket", "button", "cable",
    "camera", "candle", "castle", "channel", "circle", "cloud", "coffee", "column", "compass",
    "copper", "cottage", "crystal", "desk", "engine", "feather", "field", "forest", "garden",
    "harbor", "island", "jacket", "kettle", "ladder", "lantern", "market", "meadow", "mirror",
    "needle", "ocean", "orchard", "pencil", "planet", "pocket", "river", "rocket", "shelf",
    "signal", "stone", "table", "tunnel", "valley", "window",
];

const PREPOSITIONS: &[&str] = &[
    "a", "abaft", "aboard", "about", "above", "absent", "across", "afore", "after", "against",
    "along", "alongside", "amid", "amidst", "among", "amongst", "an", "anenst", "apropos",
    "apud", "around", "as", "aside", "astride", "at", "athwart", "atop", "barring", "before",
    "behind", "below", "beneath", "beside", "besides", "between", "beyond", "but", "by",
    "circa", "concerning", "despite", "down", "during", "except", "for", "from", "in", "inside",
    "into", "like", "near", "of", "off", "on", "onto", "over", "past", "per", "since", "than",
    "through", "to", "toward", "under", "until", "up", "upon", "via", "with", "within",
    "without",
];

const VERBS: &[&str] = &[
    "abandon", "accept", "achieve", "add", "admire", "admit", "advise", "afford", "agree",
    "alert", "allow", "amuse", "announce", "annoy", "answer", "apologize", "appear", "applaud",
    "arrange", "arrive", "ask", "attach", "attack", "attempt", "attend", "attract", "avoid",
    "back", "bake", "balance", "ban", "bang", "bathe", "battle", "beam", "beg", "behave",
    "belong", "bleach", "bless", "blind", "blink", "blot", "blush", "boast", "boil", "bolt",
    "bomb", "book", "bore", "borrow", "bounce", "bow", "box", "brake", "branch", "breathe",
    "bruise", "brush", "bubble", "build", "bump", "burn", "bury", "buzz", "calculate", "call",
    "camp", "care", "carry", "carve", "cause", "challenge", "change", "charge", "chase", "cheat",
];

const CONSONANTS: &str = "bcdfghjklmnprstvwz";
const VOWELS: &str = "aeiou";

const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_ABBR: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAYS: &[&str] = &[
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

const WEEKDAYS_ABBR: &[&str] = &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn owned(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|s| s.to_string()).collect()
}

pub(super) fn build() -> Locale {
    Locale {
        title: "English".to_string(),
        person: PersonLocale {
            first_name: GenderPools {
                general: Vec::new(),
                male: owned(MALE_FIRST_NAMES),
                female: owned(FEMALE_FIRST_NAMES),
            },
            middle_name: GenderPools::default(),
            last_name: GenderPools {
                general: owned(LAST_NAMES),
                male: owned(LAST_NAMES),
                female: owned(LAST_NAMES),
            },
            gender: GenderLocale {
                binary: owned(GENDER_BINARY),
                pool: owned(GENDER_POOL),
            },
            prefix: GenderPools {
                general: owned(PREFIX_GENERAL),
                male: owned(PREFIX_MALE),
                female: owned(PREFIX_FEMALE),
            },
            suffix: GenderPools {
                general: owned(SUFFIXES),
                male: owned(SUFFIXES),
                female: owned(SUFFIXES),
            },
            title: JobTitleLocale {
                descriptor: owned(JOB_DESCRIPTORS),
                level: owned(JOB_LEVELS),
                job: owned(JOB_TYPES),
            },
        },
        internet: InternetLocale {
            avatar: owned(AVATARS),
            email: EmailLocale {
                free: owned(FREE_EMAIL),
                example: owned(EXAMPLE_EMAIL),
            },
            domain: DomainLocale {
                suffix: owned(DOMAIN_SUFFIXES),
            },
        },
        word: WordLocale {
            adjective: owned(ADJECTIVES),
            adverb: owned(ADVERBS),
            conjunction: owned(CONJUNCTIONS),
            interjection: owned(INTERJECTIONS),
            noun: owned(NOUNS),
            preposition: owned(PREPOSITIONS),
            verb: owned(VERBS),
        },
        syntax: SyntaxLocale {
            consonants: CONSONANTS.to_string(),
            vowels: VOWELS.to_string(),
        },
        time: TimeLocale {
            month: NamedUnits {
                names: owned(MONTHS),
                abbr: owned(MONTHS_ABBR),
            },
            weekday: NamedUnits {
                names: owned(WEEKDAYS),
                abbr: owned(WEEKDAYS_ABBR),
            },
        },
    }
}
