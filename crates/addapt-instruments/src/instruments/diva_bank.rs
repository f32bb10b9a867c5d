//! DIVA 5.0 question bank: symptom items with their example checklists,
//! the supplement and criterion B questions, and the criterion C
//! impairment domains.

use crate::scoring::{Example, Item};

macro_rules! ex {
    ($id:literal, $text:literal) => {
        Example {
            id: $id,
            text: $text,
        }
    };
}

/// All 18 symptom items: A1–A9 (attention deficit, criterion A1) then
/// H/I1–H/I9 (hyperactivity-impulsivity, criterion A2).
pub static SYMPTOM_ITEMS: [Item; 18] = [
    // Attention deficit
    Item {
        id: "a1",
        text: "Do you often fail to give close attention to detail, or do you make careless mistakes in your work or during other activities?",
        examples: &[
            ex!("careless_mistakes", "Makes careless mistakes"),
            ex!("works_slowly", "Works slowly to avoid mistakes"),
            ex!("work_inaccurate", "Work is inaccurate"),
            ex!("not_read_instructions", "Does not read instructions carefully"),
            ex!("overlooks_details", "Overlooks or misses details"),
            ex!("too_much_time", "Too much time needed to complete detailed tasks"),
            ex!("bogged_down", "Gets easily bogged down by details"),
            ex!("works_too_quickly", "Works too quickly and therefore makes mistakes"),
        ],
    },
    Item {
        id: "a2",
        text: "Do you often find it difficult to sustain your attention on tasks?",
        examples: &[
            ex!("not_keep_attention", "Not able to keep attention on tasks for long"),
            ex!("distracted_thoughts", "Quickly distracted by own thoughts or associations"),
            ex!("unrelated_thoughts", "Easily distracted by unrelated thoughts"),
            ex!("difficulty_focused", "Difficulty remaining focused during lectures and/or conversations"),
            ex!("watch_film", "Finds it difficult to watch a film through to the end, or to read a book"),
            ex!("quickly_bored", "Quickly becomes bored with things"),
            ex!("asks_questions", "Asks questions about subjects that have already been discussed"),
        ],
    },
    Item {
        id: "a3",
        text: "Does it often seem as though you are not listening when you are spoken to directly?",
        examples: &[
            ex!("dreamy", "Dreamy or preoccupied"),
            ex!("difficulty_conversation", "Difficulty concentrating on a conversation"),
            ex!("not_knowing", "Afterwards, not knowing what a conversation was about"),
            ex!("changing_subject", "Often changing the subject of the conversation"),
            ex!("thoughts_elsewhere", "Others saying that your thoughts are somewhere else"),
            ex!("mind_elsewhere", "Mind seems elsewhere, even in the absence of any obvious distraction"),
        ],
    },
    Item {
        id: "a4",
        text: "Do you often fail to follow through on instructions and do you often fail to finish jobs or fail to meet obligations at work?",
        examples: &[
            ex!("muddled_together", "Does things that are muddled up together without completing them"),
            ex!("loses_focus", "Starts tasks but quickly loses focus and is easily side-tracked"),
            ex!("needs_time_limit", "Needing a time limit to complete tasks"),
            ex!("difficulty_admin", "Difficulty completing administrative tasks"),
            ex!("difficulty_manual", "Difficulty following instructions from a manual"),
        ],
    },
    Item {
        id: "a5",
        text: "Do you often find it difficult to organise tasks and activities?",
        examples: &[
            ex!("difficulty_planning", "Difficulty with planning activities of daily life"),
            ex!("difficulty_sequential", "Difficulty managing sequential tasks"),
            ex!("disorganised", "House and/or workplace are disorganised"),
            ex!("belongings_disorder", "Difficulty keeping materials and belongings in order"),
            ex!("work_messy", "Work is messy and disorganised"),
            ex!("planning_many", "Planning too many tasks or non-efficient planning"),
            ex!("double_booking", "Regularly booking things to take place at the same time - double booking"),
            ex!("arriving_late", "Arriving late"),
            ex!("miss_deadlines", "Fails to meet deadlines"),
            ex!("not_use_agenda", "Not able to use an agenda or diary consistently"),
            ex!("inflexible", "Inflexible because of the need to keep to schedules"),
            ex!("poor_time_sense", "Poor sense and management of time"),
            ex!("schedules_not_using", "Creating schedules but not using them"),
            ex!("needs_others_structure", "Needing other people to structure things"),
        ],
    },
    Item {
        id: "a6",
        text: "Do you often avoid (or do you have an aversion to, or are you unwilling to do) tasks which require sustained mental effort?",
        examples: &[
            ex!("easiest_first", "Do the easiest or nicest things first of all"),
            ex!("postpone_boring", "Often postpone boring or difficult tasks"),
            ex!("postpone_deadlines", "Postpone tasks so that deadlines are missed"),
            ex!("avoid_monotonous", "Avoid monotonous work, such as administration"),
            ex!("avoids_reports", "Avoids preparing reports, completing forms, or reviewing lengthy papers"),
            ex!("not_like_reading", "Do not like reading due to mental effort"),
            ex!("avoidance_concentration", "Avoidance of tasks that require a lot of concentration"),
        ],
    },
    Item {
        id: "a7",
        text: "Do you often lose things that are needed for tasks or activities?",
        examples: &[
            ex!("mislays_tools", "Mislays tools, paperwork, eyeglasses, mobile telephones, wallet, keys, or agenda"),
            ex!("leaves_behind", "Often leaves things behind"),
            ex!("loses_papers", "Loses papers for work"),
            ex!("time_searching", "Loses a lot of time searching for things"),
            ex!("panic_moved", "Gets in a panic if other people move things around"),
            ex!("wrong_place", "Stores things away in the wrong place"),
            ex!("loses_notes", "Loses notes, lists or telephone numbers"),
        ],
    },
    Item {
        id: "a8",
        text: "Are you often easily distracted by external stimuli?",
        examples: &[
            ex!("difficulty_shutting_off", "Difficulty shutting off from external stimuli"),
            ex!("difficult_pick_up", "After being distracted, difficult to pick up the thread again"),
            ex!("distracted_noises", "Easily distracted by noises or events"),
            ex!("distracted_conversations", "Easily distracted by the conversations of others"),
            ex!("difficulty_filtering", "Difficulty in filtering and/or selecting information"),
        ],
    },
    Item {
        id: "a9",
        text: "Are you often forgetful during daily activities?",
        examples: &[
            ex!("forgets_appointments", "Forgets appointments or other obligations"),
            ex!("forgets_keys", "Forgets keys, agenda etc."),
            ex!("needs_reminders", "Needs frequent reminders for appointments"),
            ex!("forgets_bills", "Forgets to pay bills or to return calls"),
            ex!("returning_home", "Returning home to fetch forgotten things"),
            ex!("rigid_lists", "Rigid use of lists to make sure things aren't forgotten"),
            ex!("forgets_look_agenda", "Forgets to keep or look at daily agenda"),
            ex!("forgets_chores", "Forgets to do chores or run errands"),
        ],
    },
    // Hyperactivity-impulsivity
    Item {
        id: "hi1",
        text: "Do you often move your hands or feet in a restless manner, or do you often fidget in your chair?",
        examples: &[
            ex!("difficulty_sitting", "Difficulty sitting still"),
            ex!("fidgets_legs", "Fidgets with the legs"),
            ex!("tapping_pen", "Tapping with a pen or playing with something"),
            ex!("fiddling_hair", "Fiddling with hair or biting nails"),
            ex!("control_restlessness", "Able to control restlessness, but feels stressed as a result"),
        ],
    },
    Item {
        id: "hi2",
        text: "Do you often stand up in situations where the expectation is that you should remain in your seat?",
        examples: &[
            ex!("leaves_place", "Often leaves their place in the office or workspace"),
            ex!("avoids_symposiums", "Avoids symposiums, lectures, church etc."),
            ex!("prefers_walk", "Prefers to walk around rather than sit"),
            ex!("never_sits_still", "Never sits still for long, always moving around"),
            ex!("stressed_sitting", "Stressed owing to the difficulty of sitting still"),
            ex!("makes_excuses", "Makes excuses in order to be able to walk around"),
        ],
    },
    Item {
        id: "hi3",
        text: "Do you often feel restless?",
        examples: &[
            ex!("feeling_restless", "Feeling restless or agitated inside"),
            ex!("constantly_doing", "Constantly having the feeling that you have to be doing something"),
            ex!("hard_to_relax", "Finding it hard to relax"),
        ],
    },
    Item {
        id: "hi4",
        text: "Do you often find it difficult to engage in leisure activities quietly?",
        examples: &[
            ex!("talks_during", "Talks during activities when this is not appropriate"),
            ex!("too_cocky", "Becoming quickly too cocky in public"),
            ex!("loud_situations", "Being loud in all kinds of situations"),
            ex!("difficulty_quietly", "Difficulty doing activities quietly"),
            ex!("difficulty_softly", "Difficulty in speaking softly"),
        ],
    },
    Item {
        id: "hi5",
        text: "Are you often on the go or do you often act as if \"driven by a motor\"?",
        examples: &[
            ex!("always_busy", "Always busy doing something"),
            ex!("uncomfortable_still", "Is uncomfortable being still for extended periods e.g. in restaurants or meetings"),
            ex!("too_much_energy", "Has too much energy, always on the move"),
            ex!("difficult_keep_up", "Others find you restless or difficult to keep up with"),
            ex!("stepping_boundaries", "Stepping over own boundaries"),
            ex!("excessively_driven", "Finds it difficult to let things go, excessively driven"),
        ],
    },
    Item {
        id: "hi6",
        text: "Do you often talk excessively?",
        examples: &[
            ex!("busy_talking", "So busy talking that other people find it tiring"),
            ex!("incessant_talker", "Known to be an incessant talker"),
            ex!("difficult_stop", "Finds it difficult to stop talking"),
            ex!("tendency_talk", "Tendency to talk too much"),
            ex!("not_giving_room", "Not giving others room to interject during a conversation"),
            ex!("lot_of_words", "Needing a lot of words to say something"),
        ],
    },
    Item {
        id: "hi7",
        text: "Do you often give the answer before questions have been completed?",
        examples: &[
            ex!("blabbermouth", "Being a blabbermouth, saying what you think"),
            ex!("saying_without_thinking", "Saying things without thinking first"),
            ex!("answers_before_finished", "Giving people answers before they have finished speaking"),
            ex!("completing_words", "Completing other people's words"),
            ex!("being_tactless", "Being tactless"),
        ],
    },
    Item {
        id: "hi8",
        text: "Do you often find it difficult to await your turn?",
        examples: &[
            ex!("difficulty_queue", "Difficulty waiting in a queue, jumping the queue"),
            ex!("difficulty_traffic", "Difficulty in patiently waiting in the traffic/traffic jams"),
            ex!("being_impatient", "Being impatient"),
            ex!("quickly_starting", "Quickly starting relationships/jobs, or ending/leaving these because of impatience"),
        ],
    },
    Item {
        id: "hi9",
        text: "Do you often interrupt the activities of others, or intrude on others?",
        examples: &[
            ex!("quick_interfere", "Being quick to interfere with others"),
            ex!("intrudes", "Intrudes on others"),
            ex!("disturbs_activities", "Disturbs other people's activities without being asked, or takes over their tasks"),
            ex!("comments_interference", "Comments from others about interference"),
            ex!("difficulty_boundaries", "Difficulty respecting the boundaries of others"),
            ex!("opinion_everything", "Having an opinion about everything and immediately expressing this"),
        ],
    },
];

pub const SUPPLEMENT_ADULT_QUESTION: &str = "Do you have more of these symptoms than other people, or do you experience these more frequently than other people of your age?";

pub const SUPPLEMENT_CHILDHOOD_QUESTION: &str = "Did you have more of these symptoms than other children of your age, or did you experience these more frequently than other children of your age?";

pub const CRITERION_B_QUESTION: &str = "Have you always had these symptoms of attention deficit and/or hyperactivity/impulsivity?";

pub const CRITERION_C_QUESTION: &str =
    "In which areas do you have / have you had problems with these symptoms?";

/// Items A1–A9.
pub fn attention_items() -> &'static [Item] {
    &SYMPTOM_ITEMS[..9]
}

/// Items H/I1–H/I9.
pub fn hyperactivity_impulsivity_items() -> &'static [Item] {
    &SYMPTOM_ITEMS[9..]
}

/// A criterion C area of life with its impairment checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ImpairmentDomain {
    pub id: &'static str,
    pub title: &'static str,
    pub examples: &'static [Example],
}

impl ImpairmentDomain {
    pub fn example(&self, id: &str) -> Option<&'static Example> {
        self.examples.iter().find(|e| e.id == id)
    }
}

pub static WORK_EDUCATION: ImpairmentDomain = ImpairmentDomain {
    id: "work_education",
    title: "Work/education",
    examples: &[
        ex!("not_complete_education", "Did not complete education/training needed for work"),
        ex!("work_below_level", "Work below level of education"),
        ex!("tire_workplace", "Tire quickly of a workplace"),
        ex!("many_short_jobs", "Pattern of many short-lasting jobs"),
        ex!("difficulty_admin", "Difficulty with administrative work/planning"),
        ex!("not_achieving_promotions", "Not achieving promotions"),
        ex!("under_performing", "Under-performing at work"),
        ex!("left_work", "Left work following arguments or dismissal"),
        ex!("sickness_benefits", "Sickness benefits/disability benefit as a result of symptoms"),
        ex!("limited_iq", "Limited impairment through compensation of high IQ"),
        ex!("limited_structure", "Limited impairment through compensation of external structure"),
    ],
};

pub static RELATIONSHIP: ImpairmentDomain = ImpairmentDomain {
    id: "relationship",
    title: "Relationship and/or family",
    examples: &[
        ex!("tire_relationships", "Tire quickly of relationships"),
        ex!("impulsively_commencing", "Impulsively commencing/ending relationships"),
        ex!("unequal_partner", "Unequal partner relationship owing to symptoms"),
        ex!("relationship_problems", "Relationship problems, lots of arguments, lack of intimacy"),
        ex!("divorced", "Divorced owing to symptoms"),
        ex!("problems_sexuality", "Problems with sexuality as a result of symptoms"),
        ex!("problems_upbringing", "Problems with upbringing as a result of symptoms"),
        ex!("difficulty_housekeeping", "Difficulty with housekeeping and/or administration"),
        ex!("financial_problems", "Financial problems or gambling"),
        ex!("not_daring_relationship", "Not daring to start a relationship"),
    ],
};

pub static SOCIAL_CONTACTS: ImpairmentDomain = ImpairmentDomain {
    id: "social_contacts",
    title: "Social contacts",
    examples: &[
        ex!("unable_relax", "Unable to relax properly during free time"),
        ex!("lots_sports", "Having to play lots of sports in order to relax"),
        ex!("injuries_sport", "Injuries as a result of excessive sport"),
        ex!("unable_finish_book", "Unable to finish a book or watch a film all the way through"),
        ex!("continually_busy", "Being continually busy and therefore becoming overtired"),
        ex!("tire_hobbies", "Tire quickly of hobbies"),
        ex!("accidents_driving", "Accidents/loss of driving licence as a result of reckless driving behaviour"),
        ex!("sensation_seeking", "Sensation seeking and/or taking too many risks"),
        ex!("contact_police", "Contact with the police/the courts"),
        ex!("binge_eating", "Binge eating"),
    ],
};

pub static SELF_CONFIDENCE: ImpairmentDomain = ImpairmentDomain {
    id: "self_confidence",
    title: "Self-confidence / self-image",
    examples: &[
        ex!("uncertainty", "Uncertainty through negative comments of others"),
        ex!("negative_self_image", "Negative self-image due to experiences of failure"),
        ex!("fear_failure", "Fear of failure in terms of starting new things"),
        ex!("excessive_reaction", "Excessive intense reaction to criticism"),
        ex!("perfectionism", "Perfectionism"),
        ex!("distressed_symptoms", "Distressed by the symptoms of ADHD"),
        ex!("lots_sports_relax", "Having to play lots of sports in order to relax"),
    ],
};

/// Criterion C domains in questionnaire order.
pub static IMPAIRMENT_DOMAINS: [&ImpairmentDomain; 4] =
    [&WORK_EDUCATION, &RELATIONSHIP, &SOCIAL_CONTACTS, &SELF_CONFIDENCE];
