//! English lexicon
//!
//! Built-in word lists used by [`EnglishRuleModel`](super::EnglishRuleModel) plus the
//! user lexicon that can be layered on top of them (JSON file, see [`Lexicon::from_path`]).

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::Deserialize;

use super::tokenizer::segment;
use crate::errors::ModelError;
use crate::models::{EntityLabel, PosTag};

// ─────────────────────────────────────────────────────────────────────────────
// User lexicon
// ─────────────────────────────────────────────────────────────────────────────

/// A user supplied word: part of speech and optional lemma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
  /// Part of speech forced for this word
  pub pos: PosTag,
  /// Lemma; `None` keeps the rule based lemma
  pub lemma: Option<String>,
}

/// User lexicon merged into the built-in English tables.
///
/// Words take precedence over every built-in rule. Entity phrases are matched
/// token by token before any other entity rule.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
  words: HashMap<String, WordEntry>,
  entities: HashMap<Vec<String>, EntityLabel>,
  max_entity_tokens: usize,
}

/// On-disk format of the user lexicon
#[derive(Debug, Deserialize)]
struct LexiconFile {
  #[serde(default)]
  words: HashMap<String, LexiconFileWord>,
  #[serde(default)]
  entities: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct LexiconFileWord {
  pos: String,
  #[serde(default)]
  lemma: Option<String>,
}

impl Lexicon {
  /// Creates an empty lexicon
  pub fn new() -> Self {
    Self::default()
  }

  /// Loads a lexicon from a JSON file.
  ///
  /// ```json
  /// { "words": { "tokio": { "pos": "PROPN" } }, "entities": { "Rust Foundation": "ORG" } }
  /// ```
  pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
    let path = path.as_ref();
    if !path.is_file() {
      return Err(ModelError::LexiconNotFound(path.to_path_buf()));
    }
    let json = std::fs::read_to_string(path).map_err(|e| ModelError::LexiconRead {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    let file: LexiconFile = serde_json::from_str(&json).map_err(|e| ModelError::LexiconParse {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    let mut lexicon = Self::new();
    for (word, entry) in file.words {
      let pos = entry.pos.parse::<PosTag>().map_err(|_| ModelError::UnknownPosTag {
        word: word.clone(),
        tag: entry.pos.clone(),
      })?;
      lexicon.insert_word(word, pos, entry.lemma);
    }
    for (phrase, label) in file.entities {
      let label = label.parse::<EntityLabel>().map_err(|_| ModelError::UnknownEntityLabel {
        phrase: phrase.clone(),
        label: label.clone(),
      })?;
      lexicon.insert_entity(&phrase, label);
    }
    Ok(lexicon)
  }

  /// Adds or replaces a word
  pub fn insert_word(&mut self, word: impl Into<String>, pos: PosTag, lemma: Option<String>) {
    self.words.insert(word.into(), WordEntry { pos, lemma });
  }

  /// Adds or replaces an entity phrase
  pub fn insert_entity(&mut self, phrase: &str, label: EntityLabel) {
    let key: Vec<String> = segment(phrase).into_iter().map(|r| phrase[r].to_string()).collect();
    if key.is_empty() {
      return;
    }
    self.max_entity_tokens = self.max_entity_tokens.max(key.len());
    self.entities.insert(key, label);
  }

  /// Looks up a word: exact spelling first, then lower case.
  pub fn word(&self, text: &str) -> Option<&WordEntry> {
    self.words.get(text).or_else(|| self.words.get(&text.to_lowercase()))
  }

  /// Looks up an entity phrase by its token texts
  pub fn entity(&self, tokens: &[&str]) -> Option<EntityLabel> {
    let key: Vec<String> = tokens.iter().map(|t| (*t).to_string()).collect();
    self.entities.get(&key).copied()
  }

  /// Longest entity phrase, in tokens
  pub fn max_entity_tokens(&self) -> usize {
    self.max_entity_tokens
  }

  /// Number of words plus entity phrases
  pub fn len(&self) -> usize {
    self.words.len() + self.entities.len()
  }

  /// Whether the lexicon is empty
  pub fn is_empty(&self) -> bool {
    self.words.is_empty() && self.entities.is_empty()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in tables
// ─────────────────────────────────────────────────────────────────────────────

const DETERMINERS: &[&str] = &[
  "the", "a", "an", "this", "that", "these", "those", "some", "any", "each", "every", "no",
  "all", "both", "either", "neither", "another", "such", "whatever", "whichever",
];

const PRONOUNS: &[&str] = &[
  "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
  "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
  "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
  "whose", "what", "which", "someone", "anyone", "everyone", "nobody", "somebody", "anybody",
  "everybody", "something", "anything", "everything", "nothing", "none", "whoever", "whomever",
  "yourselves", "oneself",
];

const ADPOSITIONS: &[&str] = &[
  "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
  "through", "during", "before", "after", "above", "below", "to", "from", "up", "down", "out",
  "off", "over", "under", "near", "since", "until", "till", "upon", "within", "without",
  "across", "along", "among", "around", "behind", "beneath", "beside", "besides", "beyond",
  "despite", "except", "inside", "outside", "past", "toward", "towards", "via", "per", "than",
  "as", "like", "onto", "unlike", "throughout", "amid", "versus", "vs.",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "&", "plus"];

const SUBORDINATORS: &[&str] = &[
  "if", "because", "although", "though", "while", "whereas", "unless", "whether", "once",
  "lest", "whenever", "wherever",
];

const AUXILIARIES: &[&str] = &[
  "be", "am", "is", "are", "was", "were", "been", "being", "will", "would", "shall", "should",
  "can", "could", "may", "might", "must", "'m", "'re", "'ll", "'d", "ca", "wo", "ai",
  "ought",
];

/// Auxiliaries that are main verbs unless another verb follows
const LIGHT_AUXILIARIES: &[&str] = &[
  "have", "has", "had", "having", "'ve", "do", "does", "did", "doing",
];

const PARTICLES: &[&str] = &["not", "n't", "'s", "'"];

const INTERJECTIONS: &[&str] = &[
  "oh", "ah", "hey", "hi", "hello", "wow", "yes", "yeah", "yep", "nope", "ok", "okay",
  "please", "thanks", "bye", "goodbye", "uh", "um", "alas", "oops", "hmm", "ouch", "hooray",
  "huh",
];

const NUMBER_WORDS: &[&str] = &[
  "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
  "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
  "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
  "hundred", "thousand", "million", "billion", "trillion", "dozen",
];

const ORDINAL_WORDS: &[&str] = &[
  "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
  "tenth", "eleventh", "twelfth", "twentieth", "hundredth", "thousandth", "millionth", "last",
];

const ADVERBS: &[&str] = &[
  "very", "really", "quite", "too", "also", "just", "only", "even", "still", "already",
  "always", "never", "often", "sometimes", "usually", "here", "there", "now", "then", "soon",
  "later", "again", "ever", "almost", "perhaps", "maybe", "rather", "so", "how", "when",
  "where", "why", "else", "instead", "together", "however", "therefore", "thus", "indeed",
  "away", "back", "forward", "once", "twice", "well", "fast", "hard", "much", "more", "most",
  "less", "least", "enough", "yet", "ago", "anyway", "somewhere", "anywhere", "everywhere",
  "nowhere", "otherwise", "meanwhile", "moreover", "furthermore", "nevertheless", "abroad",
  "home", "tonight", "forever",
];

const VERBS: &[&str] = &[
  "accept", "add", "agree", "allow", "answer", "appear", "apply", "arrive", "ask", "attack",
  "avoid", "believe", "belong", "borrow", "call", "care", "carry", "cause", "change", "check",
  "clean", "close", "compare", "complain", "complete", "consider", "contain", "continue",
  "cook", "copy", "count", "cover", "create", "cross", "cry", "dance", "decide", "deliver",
  "depend", "describe", "design", "destroy", "develop", "die", "discover", "discuss",
  "dress", "drop", "enjoy", "enter", "explain", "fail", "fill", "finish", "fix", "follow",
  "gather", "guess", "happen", "hate", "help", "hope", "hurry", "imagine", "improve",
  "include", "increase", "introduce", "invite", "join", "jump", "kill", "kiss", "knock",
  "laugh", "learn", "like", "listen", "live", "look", "love", "manage", "marry", "matter",
  "miss", "move", "need", "notice", "offer", "open", "order", "own", "pass", "pick", "plan",
  "play", "prefer", "prepare", "present", "prevent", "produce", "promise", "protect",
  "provide", "pull", "push", "reach", "realize", "receive", "remember", "repeat", "reply",
  "report", "require", "return", "save", "seem", "serve", "share", "shout", "smile",
  "solve", "sound", "start", "stay", "stop", "study", "succeed", "suggest", "support",
  "suppose", "talk", "taste", "test", "thank", "touch", "travel", "try", "turn", "use",
  "visit", "wait", "walk", "want", "wash", "watch", "wish", "wonder", "work", "worry",
  "parse", "compile", "run", "process", "load", "store", "download", "install", "update",
  "build", "write", "read", "remove", "replace", "return", "tokenize", "analyze", "analyse",
  "convert", "extract", "contain", "release", "publish", "launch", "announce", "expect",
  "achieve", "recommend", "mention", "handle", "measure", "reduce", "remain", "represent",
  "result", "search", "select", "spell", "train", "type", "vote", "wander", "whisper",
];

const NOUNS: &[&str] = &[
  "time", "year", "people", "way", "day", "man", "woman", "child", "world", "life", "hand",
  "part", "place", "case", "week", "company", "system", "program", "question", "work",
  "government", "number", "night", "point", "home", "water", "room", "mother", "father",
  "area", "money", "story", "fact", "month", "lot", "right", "study", "book", "eye", "job",
  "word", "business", "issue", "side", "kind", "head", "house", "service", "friend",
  "power", "hour", "game", "line", "end", "member", "law", "car", "city", "community",
  "name", "team", "minute", "idea", "kid", "body", "information", "back", "parent", "face",
  "level", "office", "door", "health", "person", "art", "war", "history", "party", "result",
  "change", "morning", "reason", "research", "girl", "guy", "moment", "air", "teacher",
  "force", "education", "text", "language", "model", "data", "code", "file", "sentence",
  "token", "library", "computer", "software", "example", "dog", "cat", "bird", "fish",
  "food", "tree", "school", "student", "country", "problem", "music", "love", "phone",
  "table", "street", "road", "market", "price", "test", "use", "need", "help", "answer",
  "plan", "order", "report", "list", "rule", "page", "paper", "letter", "picture", "team",
  "crate", "function", "value", "error", "string", "machine", "network", "server",
];

const ADJECTIVES: &[&str] = &[
  "good", "new", "first", "last", "long", "great", "little", "own", "other", "old", "right",
  "big", "high", "different", "small", "large", "next", "early", "young", "important", "few",
  "public", "bad", "same", "able", "free", "full", "sure", "real", "best", "better", "happy",
  "sad", "easy", "hard", "simple", "fast", "slow", "quick", "hot", "cold", "warm", "cool",
  "nice", "beautiful", "pretty", "ugly", "strong", "weak", "rich", "poor", "clean", "dirty",
  "safe", "dangerous", "true", "false", "open", "closed", "short", "tall", "wide", "deep",
  "dark", "light", "bright", "heavy", "huge", "tiny", "red", "blue", "green", "yellow",
  "black", "white", "many", "several", "whole", "main", "certain", "recent", "social",
  "national", "local", "natural", "human", "clear", "possible", "special", "difficult",
  "available", "likely", "major", "personal", "current", "wrong", "final", "modern",
  "popular", "ready", "similar", "smart", "tired", "busy", "famous", "lazy", "brown",
  "idiomatic", "fine", "quiet", "loud", "late", "amazing", "awesome", "terrible", "wonderful",
];

/// Irregular inflections: (form, lemma, part of speech)
const IRREGULAR_FORMS: &[(&str, &str, PosTag)] = &[
  // be / have / do / modals
  ("am", "be", PosTag::Aux),
  ("is", "be", PosTag::Aux),
  ("are", "be", PosTag::Aux),
  ("was", "be", PosTag::Aux),
  ("were", "be", PosTag::Aux),
  ("been", "be", PosTag::Aux),
  ("being", "be", PosTag::Aux),
  ("'m", "be", PosTag::Aux),
  ("'re", "be", PosTag::Aux),
  ("ai", "be", PosTag::Aux),
  ("has", "have", PosTag::Verb),
  ("had", "have", PosTag::Verb),
  ("having", "have", PosTag::Verb),
  ("'ve", "have", PosTag::Aux),
  ("does", "do", PosTag::Verb),
  ("did", "do", PosTag::Verb),
  ("done", "do", PosTag::Verb),
  ("doing", "do", PosTag::Verb),
  ("'ll", "will", PosTag::Aux),
  ("'d", "would", PosTag::Aux),
  ("ca", "can", PosTag::Aux),
  ("wo", "will", PosTag::Aux),
  ("n't", "not", PosTag::Part),
  ("gon", "go", PosTag::Verb),
  ("wan", "want", PosTag::Verb),
  ("na", "to", PosTag::Part),
  ("ta", "to", PosTag::Part),
  // irregular verbs
  ("went", "go", PosTag::Verb),
  ("gone", "go", PosTag::Verb),
  ("goes", "go", PosTag::Verb),
  ("got", "get", PosTag::Verb),
  ("gotten", "get", PosTag::Verb),
  ("made", "make", PosTag::Verb),
  ("said", "say", PosTag::Verb),
  ("says", "say", PosTag::Verb),
  ("knew", "know", PosTag::Verb),
  ("known", "know", PosTag::Verb),
  ("thought", "think", PosTag::Verb),
  ("took", "take", PosTag::Verb),
  ("taken", "take", PosTag::Verb),
  ("saw", "see", PosTag::Verb),
  ("seen", "see", PosTag::Verb),
  ("came", "come", PosTag::Verb),
  ("gave", "give", PosTag::Verb),
  ("given", "give", PosTag::Verb),
  ("found", "find", PosTag::Verb),
  ("told", "tell", PosTag::Verb),
  ("became", "become", PosTag::Verb),
  ("left", "leave", PosTag::Verb),
  ("felt", "feel", PosTag::Verb),
  ("brought", "bring", PosTag::Verb),
  ("began", "begin", PosTag::Verb),
  ("begun", "begin", PosTag::Verb),
  ("kept", "keep", PosTag::Verb),
  ("held", "hold", PosTag::Verb),
  ("wrote", "write", PosTag::Verb),
  ("written", "write", PosTag::Verb),
  ("stood", "stand", PosTag::Verb),
  ("heard", "hear", PosTag::Verb),
  ("meant", "mean", PosTag::Verb),
  ("met", "meet", PosTag::Verb),
  ("ran", "run", PosTag::Verb),
  ("paid", "pay", PosTag::Verb),
  ("sat", "sit", PosTag::Verb),
  ("spoke", "speak", PosTag::Verb),
  ("spoken", "speak", PosTag::Verb),
  ("led", "lead", PosTag::Verb),
  ("grew", "grow", PosTag::Verb),
  ("grown", "grow", PosTag::Verb),
  ("lost", "lose", PosTag::Verb),
  ("fell", "fall", PosTag::Verb),
  ("fallen", "fall", PosTag::Verb),
  ("sent", "send", PosTag::Verb),
  ("built", "build", PosTag::Verb),
  ("understood", "understand", PosTag::Verb),
  ("drew", "draw", PosTag::Verb),
  ("drawn", "draw", PosTag::Verb),
  ("broke", "break", PosTag::Verb),
  ("broken", "break", PosTag::Verb),
  ("spent", "spend", PosTag::Verb),
  ("rose", "rise", PosTag::Verb),
  ("risen", "rise", PosTag::Verb),
  ("drove", "drive", PosTag::Verb),
  ("driven", "drive", PosTag::Verb),
  ("bought", "buy", PosTag::Verb),
  ("wore", "wear", PosTag::Verb),
  ("worn", "wear", PosTag::Verb),
  ("chose", "choose", PosTag::Verb),
  ("chosen", "choose", PosTag::Verb),
  ("ate", "eat", PosTag::Verb),
  ("eaten", "eat", PosTag::Verb),
  ("drank", "drink", PosTag::Verb),
  ("drunk", "drink", PosTag::Verb),
  ("sang", "sing", PosTag::Verb),
  ("sung", "sing", PosTag::Verb),
  ("swam", "swim", PosTag::Verb),
  ("flew", "fly", PosTag::Verb),
  ("flown", "fly", PosTag::Verb),
  ("forgot", "forget", PosTag::Verb),
  ("forgotten", "forget", PosTag::Verb),
  ("sold", "sell", PosTag::Verb),
  ("taught", "teach", PosTag::Verb),
  ("caught", "catch", PosTag::Verb),
  ("fought", "fight", PosTag::Verb),
  ("slept", "sleep", PosTag::Verb),
  ("won", "win", PosTag::Verb),
  ("threw", "throw", PosTag::Verb),
  ("thrown", "throw", PosTag::Verb),
  ("shook", "shake", PosTag::Verb),
  ("hid", "hide", PosTag::Verb),
  ("hidden", "hide", PosTag::Verb),
  ("rode", "ride", PosTag::Verb),
  ("stole", "steal", PosTag::Verb),
  ("stolen", "steal", PosTag::Verb),
  ("woke", "wake", PosTag::Verb),
  ("fed", "feed", PosTag::Verb),
  ("fled", "flee", PosTag::Verb),
  ("sought", "seek", PosTag::Verb),
  ("stuck", "stick", PosTag::Verb),
  ("struck", "strike", PosTag::Verb),
  ("hung", "hang", PosTag::Verb),
  ("dug", "dig", PosTag::Verb),
  ("shot", "shoot", PosTag::Verb),
  ("tore", "tear", PosTag::Verb),
  ("torn", "tear", PosTag::Verb),
  ("froze", "freeze", PosTag::Verb),
  ("frozen", "freeze", PosTag::Verb),
  ("bent", "bend", PosTag::Verb),
  ("lent", "lend", PosTag::Verb),
  ("dealt", "deal", PosTag::Verb),
  ("laid", "lay", PosTag::Verb),
  ("blew", "blow", PosTag::Verb),
  ("blown", "blow", PosTag::Verb),
  ("shown", "show", PosTag::Verb),
  ("beaten", "beat", PosTag::Verb),
  ("bit", "bite", PosTag::Verb),
  ("bitten", "bite", PosTag::Verb),
  ("sank", "sink", PosTag::Verb),
  ("sunk", "sink", PosTag::Verb),
  ("rang", "ring", PosTag::Verb),
  ("rung", "ring", PosTag::Verb),
  // irregular nouns
  ("children", "child", PosTag::Noun),
  ("men", "man", PosTag::Noun),
  ("women", "woman", PosTag::Noun),
  ("mice", "mouse", PosTag::Noun),
  ("geese", "goose", PosTag::Noun),
  ("feet", "foot", PosTag::Noun),
  ("teeth", "tooth", PosTag::Noun),
  ("analyses", "analysis", PosTag::Noun),
  ("crises", "crisis", PosTag::Noun),
  ("phenomena", "phenomenon", PosTag::Noun),
  ("criteria", "criterion", PosTag::Noun),
  ("wives", "wife", PosTag::Noun),
  ("knives", "knife", PosTag::Noun),
  ("lives", "life", PosTag::Noun),
  ("leaves", "leaf", PosTag::Noun),
  ("halves", "half", PosTag::Noun),
  ("wolves", "wolf", PosTag::Noun),
  ("shelves", "shelf", PosTag::Noun),
  ("thieves", "thief", PosTag::Noun),
  // irregular adjectives
  ("better", "good", PosTag::Adj),
  ("best", "good", PosTag::Adj),
  ("worse", "bad", PosTag::Adj),
  ("worst", "bad", PosTag::Adj),
  ("further", "far", PosTag::Adj),
  ("farther", "far", PosTag::Adj),
];

/// Object and possessive pronouns reduce to the subject form.
const PRONOUN_LEMMAS: &[(&str, &str)] = &[
  ("me", "I"),
  ("my", "I"),
  ("mine", "I"),
  ("i", "I"),
  ("him", "he"),
  ("his", "he"),
  ("her", "she"),
  ("hers", "she"),
  ("us", "we"),
  ("our", "we"),
  ("ours", "we"),
  ("them", "they"),
  ("their", "they"),
  ("theirs", "they"),
  ("your", "you"),
  ("yours", "you"),
  ("its", "it"),
];

/// Abbreviations that keep their trailing period
const ABBREVIATIONS: &[&str] = &[
  "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "corp",
  "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "mt",
  "fig", "gen", "gov", "sen", "rep", "rev", "approx", "dept", "est", "ave", "blvd",
];

/// Abbreviations that may also close a sentence
const SENTENCE_FINAL_ABBREVIATIONS: &[&str] = &["etc.", "a.m.", "p.m.", "inc.", "ltd.", "co."];

/// Titles that introduce a person name
const HONORIFICS: &[&str] = &[
  "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Sir", "Dame", "Mr", "Mrs", "Ms", "Dr", "President",
  "Senator", "Governor", "Mayor", "Judge", "Captain", "General", "Professor", "Lady", "Lord",
  "King", "Queen", "Prince", "Princess", "Saint",
];

/// Last words of organisation names
const ORG_SUFFIXES: &[&str] = &[
  "Inc.", "Inc", "Corp.", "Corp", "Corporation", "Ltd.", "Ltd", "LLC", "Co.", "Company",
  "Group", "University", "College", "Institute", "Foundation", "Association", "Bank",
  "Agency", "Department", "Ministry", "Committee", "Council", "Party", "Labs",
  "Technologies", "Systems", "Society", "Union", "Organization", "Organisation", "Holdings",
  "Partners", "Airlines", "Motors", "Press", "Times", "News", "Club",
];

const FIRST_NAMES: &[&str] = &[
  "John", "Mary", "James", "Robert", "Michael", "William", "David", "Richard", "Joseph",
  "Thomas", "Charles", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah", "Karen",
  "Emma", "Olivia", "Alice", "Bob", "Tom", "Anna", "Maria", "Peter", "Paul", "George", "Jane",
  "Steve", "Elon", "Bill", "Barack", "Donald", "Joe", "Tim", "Mark", "Jeff", "Satya", "Ada",
  "Alan", "Grace", "Linus", "Guido", "Taro", "Hanako", "Kenji", "Yuki", "Hiroshi", "Emily",
  "Daniel", "Laura", "Chris", "Kate", "Nancy", "Angela", "Emmanuel", "Vladimir", "Xi",
];

const MONTHS: &[&str] = &[
  "January", "February", "March", "April", "May", "June", "July", "August", "September",
  "October", "November", "December", "Jan.", "Feb.", "Mar.", "Apr.", "Jun.", "Jul.", "Aug.",
  "Sep.", "Sept.", "Oct.", "Nov.", "Dec.",
];

const WEEKDAYS: &[&str] = &[
  "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

const RELATIVE_DATES: &[&str] = &["today", "yesterday", "tomorrow"];

const TIME_WORDS: &[&str] = &["tonight", "noon", "midnight"];

const DATE_UNITS: &[&str] = &[
  "day", "days", "week", "weeks", "month", "months", "year", "years", "decade", "decades",
  "century", "centuries", "weekend", "quarter", "season",
];

const TIME_UNITS: &[&str] = &["hour", "hours", "minute", "minutes", "second", "seconds"];

const MERIDIEM: &[&str] = &["am", "pm", "a.m.", "p.m.", "AM", "PM", "o'clock"];

const CURRENCY_SYMBOLS: &[&str] = &["$", "€", "£", "¥", "₹", "US$"];

const CURRENCY_WORDS: &[&str] = &[
  "dollar", "dollars", "euro", "euros", "pound", "pounds", "yen", "cent", "cents", "USD", "EUR",
  "GBP", "JPY", "rupees", "yuan", "francs",
];

const QUANTITY_UNITS: &[&str] = &[
  "km", "kilometers", "kilometres", "kilometer", "kilometre", "miles", "mile", "kg",
  "kilograms", "kilogram", "meters", "metres", "meter", "metre", "feet", "foot", "inches",
  "inch", "tons", "tonnes", "ton", "liters", "litres", "liter", "litre", "gallons", "gallon",
  "degrees", "mph", "cm", "mm", "lb", "lbs", "grams", "gram", "acres", "acre", "GB", "MB", "KB",
  "TB",
];

/// Multi-word and single-word gazetteer: (phrase tokens, label)
const GAZETTEER: &[(&[&str], EntityLabel)] = &[
  // countries & regions
  (&["United", "States"], EntityLabel::Gpe),
  (&["United", "Kingdom"], EntityLabel::Gpe),
  (&["United", "States", "of", "America"], EntityLabel::Gpe),
  (&["U.S."], EntityLabel::Gpe),
  (&["U.K."], EntityLabel::Gpe),
  (&["US"], EntityLabel::Gpe),
  (&["USA"], EntityLabel::Gpe),
  (&["UK"], EntityLabel::Gpe),
  (&["America"], EntityLabel::Gpe),
  (&["China"], EntityLabel::Gpe),
  (&["Japan"], EntityLabel::Gpe),
  (&["India"], EntityLabel::Gpe),
  (&["Germany"], EntityLabel::Gpe),
  (&["France"], EntityLabel::Gpe),
  (&["Italy"], EntityLabel::Gpe),
  (&["Spain"], EntityLabel::Gpe),
  (&["Canada"], EntityLabel::Gpe),
  (&["Mexico"], EntityLabel::Gpe),
  (&["Brazil"], EntityLabel::Gpe),
  (&["Russia"], EntityLabel::Gpe),
  (&["Australia"], EntityLabel::Gpe),
  (&["Korea"], EntityLabel::Gpe),
  (&["South", "Korea"], EntityLabel::Gpe),
  (&["North", "Korea"], EntityLabel::Gpe),
  (&["Egypt"], EntityLabel::Gpe),
  (&["Nigeria"], EntityLabel::Gpe),
  (&["Kenya"], EntityLabel::Gpe),
  (&["Ukraine"], EntityLabel::Gpe),
  (&["Poland"], EntityLabel::Gpe),
  (&["Sweden"], EntityLabel::Gpe),
  (&["Norway"], EntityLabel::Gpe),
  (&["Netherlands"], EntityLabel::Gpe),
  (&["Switzerland"], EntityLabel::Gpe),
  (&["Ireland"], EntityLabel::Gpe),
  (&["Israel"], EntityLabel::Gpe),
  (&["Turkey"], EntityLabel::Gpe),
  (&["Iran"], EntityLabel::Gpe),
  (&["Pakistan"], EntityLabel::Gpe),
  (&["Indonesia"], EntityLabel::Gpe),
  (&["Vietnam"], EntityLabel::Gpe),
  (&["Thailand"], EntityLabel::Gpe),
  (&["Singapore"], EntityLabel::Gpe),
  (&["Argentina"], EntityLabel::Gpe),
  (&["Chile"], EntityLabel::Gpe),
  (&["Taiwan"], EntityLabel::Gpe),
  // cities & states
  (&["London"], EntityLabel::Gpe),
  (&["Paris"], EntityLabel::Gpe),
  (&["Tokyo"], EntityLabel::Gpe),
  (&["Kyoto"], EntityLabel::Gpe),
  (&["Osaka"], EntityLabel::Gpe),
  (&["New", "York"], EntityLabel::Gpe),
  (&["New", "York", "City"], EntityLabel::Gpe),
  (&["Los", "Angeles"], EntityLabel::Gpe),
  (&["San", "Francisco"], EntityLabel::Gpe),
  (&["Chicago"], EntityLabel::Gpe),
  (&["Boston"], EntityLabel::Gpe),
  (&["Seattle"], EntityLabel::Gpe),
  (&["Berlin"], EntityLabel::Gpe),
  (&["Beijing"], EntityLabel::Gpe),
  (&["Shanghai"], EntityLabel::Gpe),
  (&["Moscow"], EntityLabel::Gpe),
  (&["Rome"], EntityLabel::Gpe),
  (&["Madrid"], EntityLabel::Gpe),
  (&["Toronto"], EntityLabel::Gpe),
  (&["Sydney"], EntityLabel::Gpe),
  (&["Seoul"], EntityLabel::Gpe),
  (&["Delhi"], EntityLabel::Gpe),
  (&["New", "Delhi"], EntityLabel::Gpe),
  (&["Mumbai"], EntityLabel::Gpe),
  (&["Washington"], EntityLabel::Gpe),
  (&["California"], EntityLabel::Gpe),
  (&["Texas"], EntityLabel::Gpe),
  (&["Florida"], EntityLabel::Gpe),
  (&["Hong", "Kong"], EntityLabel::Gpe),
  // locations
  (&["Europe"], EntityLabel::Loc),
  (&["Asia"], EntityLabel::Loc),
  (&["Africa"], EntityLabel::Loc),
  (&["Antarctica"], EntityLabel::Loc),
  (&["North", "America"], EntityLabel::Loc),
  (&["South", "America"], EntityLabel::Loc),
  (&["Pacific"], EntityLabel::Loc),
  (&["Atlantic"], EntityLabel::Loc),
  (&["Pacific", "Ocean"], EntityLabel::Loc),
  (&["Atlantic", "Ocean"], EntityLabel::Loc),
  (&["Mediterranean"], EntityLabel::Loc),
  (&["Alps"], EntityLabel::Loc),
  (&["Himalayas"], EntityLabel::Loc),
  (&["Mount", "Everest"], EntityLabel::Loc),
  (&["Mount", "Fuji"], EntityLabel::Loc),
  (&["Sahara"], EntityLabel::Loc),
  (&["Nile"], EntityLabel::Loc),
  // nationalities, religious and political groups
  (&["American"], EntityLabel::Norp),
  (&["Americans"], EntityLabel::Norp),
  (&["British"], EntityLabel::Norp),
  (&["Chinese"], EntityLabel::Norp),
  (&["Japanese"], EntityLabel::Norp),
  (&["German"], EntityLabel::Norp),
  (&["Germans"], EntityLabel::Norp),
  (&["French"], EntityLabel::Norp),
  (&["Italian"], EntityLabel::Norp),
  (&["Spanish"], EntityLabel::Norp),
  (&["Canadian"], EntityLabel::Norp),
  (&["Mexican"], EntityLabel::Norp),
  (&["Russian"], EntityLabel::Norp),
  (&["Indian"], EntityLabel::Norp),
  (&["Korean"], EntityLabel::Norp),
  (&["European"], EntityLabel::Norp),
  (&["Asian"], EntityLabel::Norp),
  (&["African"], EntityLabel::Norp),
  (&["Christian"], EntityLabel::Norp),
  (&["Christians"], EntityLabel::Norp),
  (&["Muslim"], EntityLabel::Norp),
  (&["Muslims"], EntityLabel::Norp),
  (&["Jewish"], EntityLabel::Norp),
  (&["Buddhist"], EntityLabel::Norp),
  (&["Hindu"], EntityLabel::Norp),
  (&["Democrat"], EntityLabel::Norp),
  (&["Democrats"], EntityLabel::Norp),
  (&["Republican"], EntityLabel::Norp),
  (&["Republicans"], EntityLabel::Norp),
  // languages
  (&["English"], EntityLabel::Language),
  (&["Latin"], EntityLabel::Language),
  (&["Esperanto"], EntityLabel::Language),
  (&["Mandarin"], EntityLabel::Language),
  (&["Hindi"], EntityLabel::Language),
  (&["Arabic"], EntityLabel::Language),
  (&["Swahili"], EntityLabel::Language),
  // organisations
  (&["Google"], EntityLabel::Org),
  (&["Microsoft"], EntityLabel::Org),
  (&["Apple"], EntityLabel::Org),
  (&["Amazon"], EntityLabel::Org),
  (&["Facebook"], EntityLabel::Org),
  (&["Meta"], EntityLabel::Org),
  (&["IBM"], EntityLabel::Org),
  (&["NASA"], EntityLabel::Org),
  (&["FBI"], EntityLabel::Org),
  (&["CIA"], EntityLabel::Org),
  (&["UN"], EntityLabel::Org),
  (&["United", "Nations"], EntityLabel::Org),
  (&["European", "Union"], EntityLabel::Org),
  (&["EU"], EntityLabel::Org),
  (&["Congress"], EntityLabel::Org),
  (&["Senate"], EntityLabel::Org),
  (&["Parliament"], EntityLabel::Org),
  (&["Mozilla"], EntityLabel::Org),
  (&["Tesla"], EntityLabel::Org),
  (&["Netflix"], EntityLabel::Org),
  (&["Twitter"], EntityLabel::Org),
  (&["Intel"], EntityLabel::Org),
  (&["Toyota"], EntityLabel::Org),
  (&["Sony"], EntityLabel::Org),
  (&["Samsung"], EntityLabel::Org),
  (&["OpenAI"], EntityLabel::Org),
  (&["Reuters"], EntityLabel::Org),
  (&["WHO"], EntityLabel::Org),
  (&["World", "Health", "Organization"], EntityLabel::Org),
  // events
  (&["World", "War", "II"], EntityLabel::Event),
  (&["World", "War", "I"], EntityLabel::Event),
  (&["World", "Cup"], EntityLabel::Event),
  (&["Olympics"], EntityLabel::Event),
  (&["Olympic", "Games"], EntityLabel::Event),
  // holidays
  (&["Christmas"], EntityLabel::Date),
  (&["Easter"], EntityLabel::Date),
  (&["Thanksgiving"], EntityLabel::Date),
];

// ─────────────────────────────────────────────────────────────────────────────
// Lookup helpers
// ─────────────────────────────────────────────────────────────────────────────

fn set_of(words: &'static [&'static str]) -> HashSet<&'static str> {
  words.iter().copied().collect()
}

static CLOSED_CLASS: LazyLock<HashMap<&'static str, PosTag>> = LazyLock::new(|| {
  let mut map = HashMap::new();
  // Later lists win for words that appear in several lists.
  let groups: [(&[&str], PosTag); 11] = [
    (ADVERBS, PosTag::Adv),
    (ADPOSITIONS, PosTag::Adp),
    (DETERMINERS, PosTag::Det),
    (PRONOUNS, PosTag::Pron),
    (COORDINATORS, PosTag::Cconj),
    (SUBORDINATORS, PosTag::Sconj),
    (INTERJECTIONS, PosTag::Intj),
    (NUMBER_WORDS, PosTag::Num),
    (LIGHT_AUXILIARIES, PosTag::Aux),
    (AUXILIARIES, PosTag::Aux),
    (PARTICLES, PosTag::Part),
  ];
  for (words, pos) in groups {
    for word in words {
      map.insert(*word, pos);
    }
  }
  // "that", "no", "once" keep the first reading their context rules start from
  map.insert("that", PosTag::Det);
  map.insert("no", PosTag::Det);
  map.insert("once", PosTag::Adv);
  map.insert("yet", PosTag::Adv);
  map
});

static IRREGULAR: LazyLock<HashMap<&'static str, (&'static str, PosTag)>> = LazyLock::new(|| {
  IRREGULAR_FORMS.iter().map(|(form, lemma, pos)| (*form, (*lemma, *pos))).collect()
});

static PRONOUN_LEMMA: LazyLock<HashMap<&'static str, &'static str>> =
  LazyLock::new(|| PRONOUN_LEMMAS.iter().copied().collect());

static VERB_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
  let mut set = set_of(VERBS);
  // base forms of the irregular table are verbs too
  set.extend(IRREGULAR_FORMS.iter().filter(|(_, _, pos)| *pos == PosTag::Verb).map(|(_, lemma, _)| *lemma));
  set
});
static NOUN_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| set_of(NOUNS));
static ADJ_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| set_of(ADJECTIVES));
static ORDINAL_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| set_of(ORDINAL_WORDS));
static ABBREVIATION_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| set_of(ABBREVIATIONS));

/// Keyed by the phrase tokens joined with single spaces
static GAZETTEER_MAP: LazyLock<HashMap<String, EntityLabel>> =
  LazyLock::new(|| GAZETTEER.iter().map(|(phrase, label)| (phrase.join(" "), *label)).collect());

/// Longest gazetteer phrase, in tokens
pub(crate) static GAZETTEER_MAX_TOKENS: LazyLock<usize> =
  LazyLock::new(|| GAZETTEER.iter().map(|(phrase, _)| phrase.len()).max().unwrap_or(1));

/// Closed-class part of speech of a lower-cased word
pub(crate) fn closed_class(lower: &str) -> Option<PosTag> {
  CLOSED_CLASS.get(lower).copied()
}

/// Lemma and part of speech of an irregular form
pub(crate) fn irregular(lower: &str) -> Option<(&'static str, PosTag)> {
  IRREGULAR.get(lower).copied()
}

/// Lemma of a pronoun
pub(crate) fn pronoun_lemma(lower: &str) -> Option<&'static str> {
  PRONOUN_LEMMA.get(lower).copied()
}

pub(crate) fn is_verb(lower: &str) -> bool {
  VERB_SET.contains(lower)
}

pub(crate) fn is_noun(lower: &str) -> bool {
  NOUN_SET.contains(lower)
}

pub(crate) fn is_adjective(lower: &str) -> bool {
  ADJ_SET.contains(lower)
}

pub(crate) fn is_ordinal_word(lower: &str) -> bool {
  ORDINAL_SET.contains(lower)
}

/// Whether `word` (without its final period) is a known abbreviation
pub(crate) fn is_abbreviation(word: &str) -> bool {
  ABBREVIATION_SET.contains(word.to_lowercase().as_str())
}

pub(crate) fn is_sentence_final_abbreviation(word: &str) -> bool {
  SENTENCE_FINAL_ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

pub(crate) fn is_honorific(word: &str) -> bool {
  HONORIFICS.contains(&word)
}

pub(crate) fn is_org_suffix(word: &str) -> bool {
  ORG_SUFFIXES.contains(&word)
}

pub(crate) fn is_first_name(word: &str) -> bool {
  FIRST_NAMES.contains(&word)
}

pub(crate) fn is_month(word: &str) -> bool {
  MONTHS.contains(&word)
}

pub(crate) fn is_weekday(word: &str) -> bool {
  WEEKDAYS.contains(&word)
}

pub(crate) fn is_relative_date(lower: &str) -> bool {
  RELATIVE_DATES.contains(&lower)
}

pub(crate) fn is_time_word(lower: &str) -> bool {
  TIME_WORDS.contains(&lower)
}

pub(crate) fn is_date_unit(lower: &str) -> bool {
  DATE_UNITS.contains(&lower)
}

pub(crate) fn is_time_unit(lower: &str) -> bool {
  TIME_UNITS.contains(&lower)
}

pub(crate) fn is_meridiem(word: &str) -> bool {
  MERIDIEM.contains(&word)
}

pub(crate) fn is_currency_symbol(word: &str) -> bool {
  CURRENCY_SYMBOLS.contains(&word)
}

pub(crate) fn is_currency_word(word: &str) -> bool {
  CURRENCY_WORDS.contains(&word)
}

pub(crate) fn is_quantity_unit(word: &str) -> bool {
  QUANTITY_UNITS.contains(&word)
}

/// Gazetteer label of a token sequence
pub(crate) fn gazetteer(tokens: &[&str]) -> Option<EntityLabel> {
  GAZETTEER_MAP.get(&tokens.join(" ")).copied()
}
