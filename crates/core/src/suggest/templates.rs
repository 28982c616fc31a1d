//! Suggestion template pools.
//!
//! Negative pools are pools of bundles: one pick appends the whole
//! bundle, keeping paired sentences (action + reinforcement) together.
//! Positive pools are pools of single sentences.

/// Pool of suggestion bundles.
pub type BundlePool = &'static [&'static [&'static str]];

/// Pool of single sentences.
pub type SentencePool = &'static [&'static str];

// ── Horas de Estudo (weekly hours, bucketed) ──────────────────────

/// >= 50h/week: too much, steer toward quality and rest.
pub const STUDY_NEG_HIGH: BundlePool = &[
    &[
        "Considere reduzir para 35-42 horas semanais (5-6h por dia) e focar na qualidade do estudo",
        "Inclua pausas regulares e atividades de descanso para evitar esgotamento",
    ],
    &[
        "Equilibre melhor seu tempo: 35-42 horas semanais são suficientes com estudo de qualidade",
        "Lembre-se: descanso também é importante para o aprendizado!",
    ],
];

/// < 20h/week: far below the ideal.
pub const STUDY_NEG_VERY_LOW: BundlePool = &[
    &[
        "Aumente suas horas de estudo para pelo menos 28-35 horas semanais (4-5h por dia)",
        "Organize um cronograma de estudos regular distribuído ao longo da semana",
    ],
    &[
        "Tente dedicar mais tempo aos estudos - 28-35 horas semanais farão uma grande diferença!",
        "Crie uma rotina de estudos diária para tornar o hábito mais fácil",
    ],
];

/// 20-28h/week: still low.
pub const STUDY_NEG_LOW: BundlePool = &[
    &[
        "Tente aumentar para pelo menos 28-35 horas semanais (4-5h por dia)",
        "Distribua o estudo ao longo da semana de forma equilibrada",
    ],
    &[
        "Aumentar para 28-35 horas semanais te ajudará a ver melhorias significativas",
        "Organize seus estudos em blocos de tempo ao longo da semana",
    ],
];

/// 28-50h/week: reasonable amount, push on quality.
pub const STUDY_NEG_MID: BundlePool = &[
    &[
        "Melhore a qualidade e eficiência do seu tempo de estudo",
        "Use técnicas de estudo ativo como resumos, exercícios práticos e revisões",
    ],
    &[
        "Foque na qualidade do estudo - técnicas eficientes valem mais que horas extras",
        "Experimente métodos como Pomodoro, mapas mentais e prática ativa",
    ],
];

// ── Other negative features ───────────────────────────────────────

pub const ATTENDANCE_NEG: BundlePool = &[
    &[
        "Tente aumentar sua frequência às aulas para pelo menos 80%",
        "Se não puder comparecer, peça o material da aula para não perder conteúdo",
    ],
    &[
        "Comparecer regularmente às aulas é fundamental - tente chegar a pelo menos 80% de frequência",
        "Quando não puder comparecer, mantenha contato com colegas e professores para não ficar para trás",
    ],
];

pub const PARTICIPATION_NEG: BundlePool = &[
    &[
        "Participe mais ativamente das aulas fazendo perguntas e respondendo",
        "Tome notas durante as aulas para melhorar seu engajamento",
    ],
    &[
        "Não tenha medo de levantar a mão e fazer perguntas - isso ajuda muito no aprendizado!",
        "Anotar durante as aulas te ajuda a se manter focado e a fixar melhor o conteúdo",
    ],
];

/// < 6h/night.
pub const SLEEP_NEG_LOW: BundlePool = &[
    &[
        "Tente dormir pelo menos 7-8 horas por noite para melhorar sua concentração",
        "Um bom sono é essencial para fixar o aprendizado - priorize isso!",
    ],
    &[
        "Dormir 7-8 horas por noite fará uma grande diferença na sua capacidade de aprendizado",
        "O sono adequado melhora a memória e a concentração - não subestime seu poder!",
    ],
];

/// > 10h/night.
pub const SLEEP_NEG_HIGH: BundlePool = &[&[
    "Considere reduzir um pouco o sono para ter mais tempo de estudo, mantendo 7-8 horas",
    "7-8 horas de sono são suficientes e te darão mais tempo para os estudos",
]];

/// 6-10h/night but still flagged negative: routine problem, not amount.
pub const SLEEP_NEG_REGULAR: BundlePool = &[
    &["Garanta uma rotina de sono regular e de qualidade"],
    &["Mantenha horários consistentes para dormir e acordar"],
];

pub const MOTIVATION_NEG: BundlePool = &[
    &[
        "Procure atividades que aumentem sua motivação para estudar",
        "Estabeleça metas claras e recompensas ao alcançá-las",
    ],
    &[
        "Encontre formas de tornar os estudos mais interessantes e recompensadores",
        "Celebre cada pequena conquista - isso ajuda a manter a motivação!",
    ],
];

pub const ABSENCE_NEG: BundlePool = &[
    &[
        "Reduza suas faltas para não perder conteúdo essencial",
        "Se precisar faltar, comunique-se com o professor antecipadamente",
    ],
    &[
        "Cada aula perdida é uma oportunidade de aprendizado que não volta",
        "Mantenha comunicação com professores quando não puder comparecer",
    ],
];

pub const MATERIALS_NEG: BundlePool = &[
    &[
        "Acesse mais materiais de estudo disponíveis na plataforma",
        "Explore vídeos, textos e exercícios complementares",
    ],
    &[
        "Há muito conteúdo interessante disponível - explore mais!",
        "Vídeos, textos e exercícios extras podem te ajudar muito no aprendizado",
    ],
];

pub const DISCUSSION_NEG: BundlePool = &[
    &[
        "Participe mais de discussões e fóruns para melhorar seu aprendizado",
        "Faça perguntas e compartilhe suas dúvidas com colegas e professores",
    ],
    &[
        "As discussões são uma ótima forma de aprender - participe mais!",
        "Não hesite em compartilhar dúvidas - isso ajuda você e seus colegas",
    ],
];

// ── Positive encouragement ────────────────────────────────────────

pub const STUDY_POS: SentencePool = &[
    "Continue mantendo boas horas de estudo, mas não esqueça do descanso! 💪",
    "Excelente dedicação! Lembre-se de equilibrar estudo e descanso para manter o foco! ⚖️",
];

pub const ATTENDANCE_POS: SentencePool = &[
    "Ótimo! Continue mantendo uma boa frequência - isso está fazendo toda a diferença! 👏",
    "Excelente! Sua assiduidade está te ajudando muito - continue assim! ⭐",
];

pub const PARTICIPATION_POS: SentencePool = &[
    "Excelente participação! Continue se envolvendo ativamente - você está no caminho certo! 🎯",
    "Ótimo trabalho! Sua participação está sendo um diferencial - mantenha esse engajamento! 🌟",
];

pub const SLEEP_POS: SentencePool = &[
    "Continue mantendo uma boa rotina de sono - isso está te ajudando muito! 😴",
    "Ótimo! Um sono de qualidade é fundamental - continue cuidando disso! ✨",
];

pub const GENERIC_POS: SentencePool = &[
    "Continue mantendo esse bom hábito - está fazendo toda a diferença! 💎",
    "Parabéns! Continue investindo nesse aspecto - está valendo a pena! 🎊",
];

// ── Positive, favorable outcome: celebrate and nudge ──────────────

pub const STUDY_POS_FAVORABLE: SentencePool = &[
    "Suas horas de estudo já estão ótimas - que tal testar técnicas novas para render ainda mais? 🚀",
    "Ritmo de estudo excelente! Um pequeno ajuste de técnica pode levar você ainda mais longe! 📈",
];

pub const ATTENDANCE_POS_FAVORABLE: SentencePool = &[
    "Frequência impecável! Aproveite as aulas para tirar dúvidas avançadas com os professores! 🎓",
    "Sua presença constante já é um diferencial - use-a para participar ainda mais ativamente! ⭐",
];

pub const PARTICIPATION_POS_FAVORABLE: SentencePool = &[
    "Sua participação já se destaca - experimente liderar um grupo de estudos! 🙌",
    "Engajamento excelente! Que tal ajudar colegas com mais dificuldade? Ensinar consolida o aprendizado! 🤝",
];

pub const SLEEP_POS_FAVORABLE: SentencePool = &[
    "Rotina de sono em dia! Com essa base, vale investir em técnicas de estudo mais intensas! 🌙",
    "Seu descanso está ótimo - aproveite a energia extra para revisar conteúdos antigos! ✨",
];

pub const GENERIC_POS_FAVORABLE: SentencePool = &[
    "Esse hábito já está consolidado - escolha um próximo ponto para evoluir! 🏆",
    "Você domina esse aspecto - mire agora em uma meta um pouco mais ambiciosa! 🎯",
];

// ── Top-up bundles ────────────────────────────────────────────────

pub const GENERAL_PERFORMANCE: BundlePool = &[
    &[
        "Organize um cronograma de estudos regular e cumpra-o",
        "Revise o conteúdo das aulas regularmente para fixar o aprendizado",
    ],
    &[
        "Crie uma rotina de estudos consistente",
        "Faça revisões periódicas do conteúdo para melhorar a retenção",
    ],
    &[
        "Estabeleça horários fixos para estudar",
        "Use técnicas de revisão espaçada para melhorar a memória",
    ],
];

pub const GENERAL_DROPOUT: BundlePool = &[
    &[
        "Mantenha-se engajado com as atividades escolares regularmente",
        "Procure ajuda dos professores quando necessário - eles estão aqui para te ajudar!",
    ],
    &[
        "Participe ativamente das atividades e mantenha contato com colegas e professores",
        "Não hesite em pedir apoio quando precisar - você não está sozinho nessa jornada!",
    ],
    &[
        "Mantenha uma conexão constante com a comunidade escolar",
        "Estabeleça uma rede de apoio com professores e colegas",
    ],
];

/// Urgent actions appended verbatim, in order, when the performance band
/// is critical. Never randomized.
pub const ESCALATION: SentencePool = &[
    "Procure seu professor ou coordenador ainda esta semana para montar um plano de recuperação",
    "Monte um cronograma de estudos de emergência priorizando as matérias com maior dificuldade",
    "Compareça a todas as aulas e monitorias disponíveis nas próximas semanas",
    "Peça apoio à família e aos colegas para manter a rotina de estudos em dia",
];

/// Appended when the outcome is already favorable but the list is short:
/// consolidate what is working.
pub const CONSOLIDATE: SentencePool = &[
    "Mantenha a regularidade que te trouxe até aqui - consistência vale mais que picos de esforço",
    "Estabeleça uma meta nova e um pouco mais ambiciosa para o próximo período",
    "Compartilhe suas estratégias de estudo com colegas - ensinar também consolida o aprendizado",
];
