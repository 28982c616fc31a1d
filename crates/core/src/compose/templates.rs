//! Lead-sentence, title and band-message template pools.
//!
//! Templates carry `{feature}`, `{value}`, `{weekly}` and `{daily}`
//! placeholders, substituted by the composer. Feature names are
//! interpolated in lowercase mid-sentence form.

use crate::suggest::templates::SentencePool;

// ── Performance: no-explanation path ──────────────────────────────

pub const PERF_FALLBACK_TITLES: SentencePool = &[
    "Feedback sobre sua Predição",
    "Resumo da sua Nota Prevista",
    "Sua Predição de Desempenho",
];

pub const PERF_EXCELLENT_MSGS: SentencePool = &[
    "Sua nota prevista está excelente! 🎉 Continue mantendo seus bons hábitos de estudo - você está no caminho certo!",
    "Parabéns! Sua nota prevista está muito boa! ⭐ Seus esforços estão rendendo frutos. Continue assim!",
    "Excelente trabalho! Sua nota prevista mostra que você está se dedicando bastante! 💪 Mantenha o foco!",
];

pub const PERF_GOOD_MSGS: SentencePool = &[
    "Sua nota prevista está muito boa! 👏 Com alguns ajustes e mais dedicação, você pode alcançar resultados ainda melhores!",
    "Ótimo! Sua nota prevista está boa, mas há espaço para crescimento! 🌱 Foque nos pontos que mais impactam seu desempenho.",
    "Bom trabalho! Sua nota prevista está no caminho certo! 🎯 Com pequenos ajustes, você pode melhorar ainda mais!",
];

pub const PERF_APPROVED_MSGS: SentencePool = &[
    "Sua nota prevista está na média. 💡 Com mais dedicação e organização, você tem potencial para melhorar significativamente!",
    "Sua nota prevista mostra que há espaço para crescimento! 🌟 Não desista - com foco e disciplina, você pode alcançar melhores resultados!",
    "Sua nota prevista está boa, mas pode melhorar! ✨ Identifique seus pontos fracos e trabalhe neles com dedicação!",
];

pub const PERF_CRITICAL_MSGS: SentencePool = &[
    "Sua nota prevista está abaixo do esperado, mas não desanime! 💪 Com foco, dedicação e organização, você pode melhorar muito!",
    "Sua nota prevista indica que há desafios, mas você tem potencial! 🌱 Não desista - cada pequeno passo conta!",
    "Sua nota prevista está baixa, mas isso não define você! 🎯 Com determinação e apoio, você pode superar qualquer desafio!",
];

// ── Performance: explanation path ─────────────────────────────────

pub const PERF_TITLES: SentencePool = &[
    "O que mais influenciou sua nota",
    "Principais fatores da sua predição",
    "Análise do seu desempenho",
];

pub const PERF_NEG_OPENERS: SentencePool = &[
    "Sua nota foi impactada principalmente por {feature}. ",
    "O principal fator que está afetando sua nota é {feature}. ",
    "Identificamos que {feature} está sendo o maior desafio para seu desempenho. ",
];

/// Urgent-tone variant used when the score is in the critical band.
pub const PERF_NEG_OPENERS_CRITICAL: SentencePool = &[
    "Atenção: {feature} está comprometendo seriamente sua nota. ",
    "Sua nota está em zona crítica, puxada principalmente por {feature}. ",
    "É hora de agir sobre {feature} - hoje esse é o fator que mais derruba sua nota. ",
];

pub const STUDY_DETAIL_VERY_LOW: SentencePool = &[
    "Com apenas {weekly} horas semanais ({daily}h por dia), você está estudando menos do que o ideal. Que tal aumentar para pelo menos 28-35 horas semanais?",
    "Estudar {weekly} horas por semana ({daily}h por dia) é muito pouco para alcançar seus objetivos. Tente dedicar mais tempo aos estudos!",
    "Seu tempo de estudo atual ({weekly}h semanais, {daily}h por dia) pode estar limitando seu potencial. Aumentar para 28-35 horas semanais faria uma grande diferença!",
];

pub const STUDY_DETAIL_LOW: SentencePool = &[
    "Suas {weekly} horas semanais ({daily}h por dia) são um bom começo, mas ainda podem ser insuficientes. Tente aumentar para pelo menos 28-35 horas semanais para ver melhorias significativas!",
    "Com {weekly} horas semanais ({daily}h por dia), você está no caminho certo, mas pode melhorar! Aumentar para 28-35 horas semanais te ajudaria muito.",
];

pub const STUDY_DETAIL_HIGH: SentencePool = &[
    "Estudar {weekly} horas por semana ({daily}h por dia) é bastante tempo! Mas lembre-se: qualidade é mais importante que quantidade. Considere equilibrar melhor com descanso.",
    "Você está dedicando {weekly} horas semanais ({daily}h por dia) aos estudos - isso é muito! Não esqueça de descansar, pois o cansaço pode prejudicar seu aprendizado.",
];

pub const STUDY_DETAIL_MID: SentencePool = &[
    "Suas {weekly} horas semanais ({daily}h por dia) podem não estar sendo aproveitadas da melhor forma. Foque na qualidade do estudo e em técnicas eficientes!",
    "Com {weekly} horas semanais ({daily}h por dia), você tem potencial para melhorar! Tente técnicas de estudo mais ativas e eficientes.",
];

pub const ATTENDANCE_DETAIL_VERY_LOW: SentencePool = &[
    "Sua frequência de {value}% está muito abaixo do ideal. Comparecer às aulas é fundamental para não perder conteúdo importante. Tente aumentar para pelo menos 80%!",
    "Com {value}% de frequência, você está perdendo muito conteúdo. Cada aula perdida é uma oportunidade de aprendizado que não volta. Vamos melhorar isso?",
];

pub const ATTENDANCE_DETAIL_LOW: SentencePool = &[
    "Sua frequência de {value}% pode estar afetando seu aprendizado. Tente aumentar para pelo menos 80% para não perder conteúdo essencial.",
    "Com {value}% de frequência, há espaço para melhorar. Comparecer mais às aulas te ajudará a entender melhor o conteúdo!",
];

pub const SLEEP_DETAIL_VERY_LOW: SentencePool = &[
    "Dormir apenas {value} horas por noite não é suficiente! O sono é essencial para fixar o aprendizado. Tente dormir pelo menos 7-8 horas para melhorar sua concentração.",
    "Com {value} horas de sono por noite, seu cérebro não tem tempo suficiente para descansar. Um bom sono (7-8h) faz toda a diferença no aprendizado!",
];

pub const SLEEP_DETAIL_VERY_HIGH: SentencePool = &[
    "Dormir {value} horas por noite pode estar reduzindo seu tempo disponível para estudos. Tente equilibrar: 7-8 horas de sono são ideais!",
    "{value} horas de sono por noite é bastante! Considere reduzir um pouco para ter mais tempo de estudo, mantendo 7-8 horas que são suficientes.",
];

pub const SLEEP_DETAIL_MID: SentencePool = &[
    "Suas {value} horas de sono podem estar impactando seu desempenho. Uma rotina de sono regular e de qualidade (7-8h) é fundamental!",
    "Com {value} horas de sono, tente estabelecer uma rotina mais consistente. O sono de qualidade melhora muito a concentração!",
];

pub const MOTIVATION_DETAIL: SentencePool = &[
    "Seu nível de motivação ({value}/10) está baixo e isso pode estar afetando seu desempenho. Que tal encontrar atividades que te inspirem mais?",
    "Com motivação em {value}/10, é difícil manter o foco. Procure formas de tornar os estudos mais interessantes e recompensadores!",
    "Sua motivação ({value}/10) pode estar limitando seu potencial. Estabeleça metas claras e celebre cada conquista - isso ajuda muito!",
];

pub const PREVIOUS_SCORES_DETAIL: SentencePool = &[
    "Suas notas anteriores ({value}) indicam que há espaço para crescimento. Não desanime - cada novo semestre é uma nova oportunidade!",
    "Com notas anteriores de {value}, você tem potencial para melhorar muito. Foque nos pontos que mais impactam seu desempenho!",
];

pub const GENERIC_NEG_DETAIL: SentencePool = &[
    "O fator {feature} ({value}) está impactando negativamente seu desempenho. Focar em melhorar isso pode fazer uma grande diferença!",
    "O fator {feature} ({value}) está sendo um desafio. Mas não se preocupe - com dedicação, você pode melhorar!",
    "Identificamos que o fator {feature} ({value}) precisa de atenção. Trabalhar nisso te ajudará a alcançar melhores resultados!",
];

pub const STUDY_POS_LEADS: SentencePool = &[
    "Estudar {weekly} horas por semana ({daily}h por dia) está te levando ao sucesso! Continue mantendo essa dedicação! 💪",
    "Suas {weekly} horas semanais ({daily}h por dia) de estudo estão rendendo frutos! Parabéns pela disciplina! 🌟",
    "Excelente! Com {weekly} horas semanais ({daily}h por dia), você está no caminho certo! Continue assim! 🎯",
];

pub const ATTENDANCE_POS_LEADS: SentencePool = &[
    "Sua frequência de {value}% está excelente! Comparecer às aulas regularmente é um dos segredos do sucesso! 👏",
    "Ótimo! Com {value}% de frequência, você está aproveitando ao máximo as aulas. Continue assim! ⭐",
    "Parabéns! Sua frequência de {value}% mostra seu comprometimento. Isso está fazendo toda a diferença! 🎉",
];

pub const RESOURCE_POS_LEADS: SentencePool = &[
    "Contar com {feature} está te ajudando muito! Continue aproveitando bem esses recursos! 📚",
    "Ótimo! O fator {feature} está contribuindo positivamente para seu aprendizado! 💡",
];

pub const SUPPORT_POS_LEADS: SentencePool = &[
    "Contar com {feature} está sendo um grande apoio no seu aprendizado! Continue valorizando isso! 🤝",
    "Excelente! O fator {feature} está te dando a base necessária para o sucesso! 🌱",
];

pub const GENERIC_POS_LEADS: SentencePool = &[
    "Continue mantendo esse bom hábito! Ele está fazendo toda a diferença! ✨",
    "Parabéns! O fator {feature} está te ajudando a alcançar seus objetivos! 🎊",
    "Ótimo trabalho! Continue investindo nesse aspecto - está valendo a pena! 💎",
];

/// Positive top factor while the overall score is still critical.
pub const PERF_POS_LEADS_CRITICAL: SentencePool = &[
    "O fator {feature} está do seu lado, mas a nota geral ainda pede atenção urgente. Use esse ponto forte como base para recuperar o restante!",
    "Mesmo com {feature} contribuindo positivamente, sua nota segue em zona crítica. Concentre energia nos pontos fracos o quanto antes!",
    "Que bom que o fator {feature} está ajudando - agora é hora de agir com a mesma força nos fatores que derrubam sua nota.",
];

// ── Dropout: no-explanation path ──────────────────────────────────

pub const DROPOUT_FALLBACK_TITLES: SentencePool = &[
    "Feedback sobre seu Risco de Evasão",
    "Resumo do seu Risco de Evasão",
    "Sua Análise de Permanência",
];

pub const DROPOUT_HIGH_MSGS: SentencePool = &[
    "Seu risco de evasão é alto. ⚠️ É importante focar em melhorar seu engajamento com as atividades escolares. Você consegue superar isso!",
    "Identificamos um risco de evasão elevado. 💪 Mas não desista! Com dedicação e apoio, você pode reverter essa situação.",
    "Seu risco de evasão está alto, mas isso não é definitivo! 🌱 Foque em se engajar mais com os estudos e atividades escolares.",
];

pub const DROPOUT_MEDIUM_MSGS: SentencePool = &[
    "Seu risco de evasão é médio. 💡 Com alguns ajustes e mais engajamento, você pode reduzir esse risco significativamente!",
    "Há um risco moderado de evasão identificado. 🎯 Mas com foco e dedicação, você pode melhorar sua situação!",
    "Seu risco de evasão está na média. ✨ Trabalhe nos pontos que mais impactam seu engajamento para reduzir esse risco!",
];

pub const DROPOUT_LOW_MSGS: SentencePool = &[
    "Ótima notícia! Seu risco de evasão é baixo! 🎉 Continue mantendo seu bom engajamento e dedicação!",
    "Parabéns! Seu risco de evasão está baixo! ⭐ Você está no caminho certo - continue assim!",
    "Excelente! Seu risco de evasão é baixo! 👏 Seu engajamento está fazendo toda a diferença!",
];

// ── Dropout: explanation path ─────────────────────────────────────

pub const DROPOUT_TITLES: SentencePool = &[
    "O que mais influencia seu risco de evasão",
    "Principais fatores do seu risco de evasão",
    "Análise da sua permanência",
];

pub const DROPOUT_NEG_OPENERS: SentencePool = &[
    "Seu risco de evasão é aumentado principalmente por {feature}. ",
    "O principal fator que está elevando seu risco de evasão é {feature}. ",
    "Identificamos que {feature} está sendo o maior desafio para sua permanência. ",
];

pub const DROPOUT_ABSENCE_DETAIL: SentencePool = &[
    "Muitas faltas podem indicar desengajamento. Tente reduzir suas ausências - cada aula é importante!",
    "As faltas estão aumentando seu risco. Comparecer mais às aulas te ajudará a se sentir mais conectado com os estudos.",
    "Reduzir suas faltas é fundamental. Quando você falta, perde conteúdo e conexão com a turma. Vamos melhorar isso?",
];

pub const DROPOUT_PARTICIPATION_DETAIL: SentencePool = &[
    "Pouca participação pode indicar falta de interesse. Que tal se envolver mais? Fazer perguntas e responder ajuda muito!",
    "Participar mais das aulas te ajudará a se sentir mais engajado. Não tenha medo de levantar a mão e interagir!",
    "A participação ativa nas aulas faz toda a diferença. Tente fazer pelo menos uma pergunta ou comentário por aula!",
];

pub const DROPOUT_MATERIALS_DETAIL: SentencePool = &[
    "Acessar poucos materiais pode afetar seu aprendizado. Explore mais os recursos disponíveis - há muito conteúdo interessante!",
    "Os materiais de estudo estão aí para te ajudar! Acesse mais vídeos, textos e exercícios para melhorar seu aprendizado.",
    "Que tal explorar mais os materiais disponíveis? Quanto mais você acessa, mais opções de aprendizado você tem!",
];

pub const DROPOUT_GENERIC_DETAIL: SentencePool = &[
    "Melhorar {art} {feature} pode ajudar muito a reduzir o risco. Você consegue! 💪",
    "Trabalhar em {art} {feature} fará uma grande diferença. Vamos juntos nessa jornada! 🌱",
    "Focar em melhorar {art} {feature} é um passo importante. Acredite no seu potencial! ✨",
];

pub const DROPOUT_POS_OPENERS: SentencePool = &[
    "Ótima notícia! O fator {feature} está reduzindo seu risco de evasão! 🎉",
    "Parabéns! O fator {feature} está te ajudando a permanecer engajado! 👏",
    "Excelente! O fator {feature} está sendo um grande aliado na sua permanência! ⭐",
];

/// Fixed closers appended to a positive dropout opener.
pub const DROPOUT_POS_CLOSER_ABSENCE: &str = " Continue comparecendo às aulas regularmente!";
pub const DROPOUT_POS_CLOSER_PARTICIPATION: &str =
    " Continue participando ativamente - isso está te mantendo engajado!";
pub const DROPOUT_POS_CLOSER_MATERIALS: &str = " Continue explorando os materiais disponíveis!";
pub const DROPOUT_POS_CLOSER_GENERIC: &str = " Continue mantendo esse bom hábito!";
