/// Genesis 1:1, pointed, ending with sof pasuq.
#[allow(dead_code)]
pub const GENESIS_1_1: &str =
    "בְּרֵאשִׁית בָּרָא אֱלֹהִים אֵת הַשָּׁמַיִם וְאֵת הָאָרֶץ׃";

/// Genesis 1:1-2, the demo lesson passage.
#[allow(dead_code)]
pub const GENESIS_1_1_2: &str = "בְּרֵאשִׁית בָּרָא אֱלֹהִים אֵת הַשָּׁמַיִם וְאֵת הָאָרֶץ׃ וְהָאָרֶץ הָיְתָה תֹהוּ וָבֹהוּ וְחֹשֶׁךְ עַל־פְּנֵי תְהוֹם וְרוּחַ אֱלֹהִים מְרַחֶפֶת עַל־פְּנֵי הַמָּיִם׃";

/// Distinct words of [`GENESIS_1_1_2`] in first-occurrence order.
#[allow(dead_code)]
pub const GENESIS_1_1_2_WORDS: &[&str] = &[
    "בְּרֵאשִׁית",
    "בָּרָא",
    "אֱלֹהִים",
    "אֵת",
    "הַשָּׁמַיִם",
    "וְאֵת",
    "הָאָרֶץ",
    "וְהָאָרֶץ",
    "הָיְתָה",
    "תֹהוּ",
    "וָבֹהוּ",
    "וְחֹשֶׁךְ",
    "עַל־פְּנֵי",
    "תְהוֹם",
    "וְרוּחַ",
    "מְרַחֶפֶת",
    "הַמָּיִם",
];
