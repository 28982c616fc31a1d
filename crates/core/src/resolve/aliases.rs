//! Raw-key alias table.
//!
//! Keys are pre-normalized (lowercase, no spaces/underscores/hyphens) so
//! exact lookup works against the normalized input. Declaration order
//! matters for the substring scan: first hit wins. The trailing block
//! maps each canonical display name to itself so `resolve` is idempotent
//! on already-resolved labels.

pub const ALIASES: &[(&str, &str)] = &[
    // study hours
    ("horasestudo", "Horas de Estudo"),
    ("hoursstudied", "Horas de Estudo"),
    ("studyhours", "Horas de Estudo"),
    // sleep
    ("sono", "Horas de Sono"),
    ("sleep", "Horas de Sono"),
    ("sleephours", "Horas de Sono"),
    // motivation
    ("motivacao", "Nível de Motivação"),
    ("motivation", "Nível de Motivação"),
    ("motivationlevel", "Nível de Motivação"),
    // attendance
    ("frequencia", "Frequência às Aulas"),
    ("frequency", "Frequência às Aulas"),
    ("attendance", "Frequência às Aulas"),
    ("attendancerate", "Frequência às Aulas"),
    // previous scores
    ("previousscores", "Notas Anteriores"),
    ("previousgrades", "Notas Anteriores"),
    // distance
    ("distancefromhome", "Distância de Casa"),
    ("distance", "Distância de Casa"),
    // gender
    ("gender", "Gênero"),
    // parental education
    ("parentaleducationlevel", "Nível Educacional dos Pais"),
    ("parenteducation", "Nível Educacional dos Pais"),
    // parental involvement
    ("parentalinvolvement", "Envolvimento dos Pais"),
    ("parentinvolvement", "Envolvimento dos Pais"),
    // school type
    ("schooltype", "Tipo de Escola"),
    // peer influence
    ("peerinfluence", "Influência dos Colegas"),
    // extracurricular
    ("extracurricularactivities", "Atividades Extracurriculares"),
    // learning disabilities
    ("learningdisabilities", "Deficiências de Aprendizagem"),
    // internet access
    ("internetaccess", "Acesso à Internet"),
    // resource access
    ("accesstoresources", "Acesso a Recursos"),
    ("resources", "Acesso a Recursos"),
    // teacher quality
    ("teacherquality", "Qualidade do Professor"),
    // family income
    ("familyincome", "Renda Familiar"),
    ("income", "Renda Familiar"),
    // tutoring
    ("tutoringsessions", "Sessões de Tutoria"),
    ("tutoring", "Sessões de Tutoria"),
    // physical activity
    ("physicalactivity", "Atividade Física"),
    // class participation
    ("raisedhands", "Participação em Aula"),
    ("participation", "Participação em Aula"),
    // accessed materials
    ("visitedresources", "Materiais Acessados"),
    ("resourcesaccessed", "Materiais Acessados"),
    // announcements
    ("announcementsview", "Avisos Visualizados"),
    ("announcements", "Avisos Visualizados"),
    // discussions
    ("discussion", "Participações em Discussões"),
    ("discussions", "Participações em Discussões"),
    // parent survey
    ("parentansweringsurvey", "Pais Responderam Pesquisa"),
    // parent satisfaction
    ("parentschoolsatisfaction", "Satisfação dos Pais"),
    // absences
    ("studentabsencedays", "Faltas Escolares"),
    ("absences", "Faltas Escolares"),
    ("absencedays", "Faltas Escolares"),
    // canonical names resolve to themselves
    ("horasdeestudo", "Horas de Estudo"),
    ("horasdesono", "Horas de Sono"),
    ("níveldemotivação", "Nível de Motivação"),
    ("frequênciaàsaulas", "Frequência às Aulas"),
    ("notasanteriores", "Notas Anteriores"),
    ("distânciadecasa", "Distância de Casa"),
    ("gênero", "Gênero"),
    ("níveleducacionaldospais", "Nível Educacional dos Pais"),
    ("envolvimentodospais", "Envolvimento dos Pais"),
    ("tipodeescola", "Tipo de Escola"),
    ("influênciadoscolegas", "Influência dos Colegas"),
    ("atividadesextracurriculares", "Atividades Extracurriculares"),
    ("deficiênciasdeaprendizagem", "Deficiências de Aprendizagem"),
    ("acessoàinternet", "Acesso à Internet"),
    ("acessoarecursos", "Acesso a Recursos"),
    ("qualidadedoprofessor", "Qualidade do Professor"),
    ("rendafamiliar", "Renda Familiar"),
    ("sessõesdetutoria", "Sessões de Tutoria"),
    ("atividadefísica", "Atividade Física"),
    ("participaçãoemaula", "Participação em Aula"),
    ("materiaisacessados", "Materiais Acessados"),
    ("avisosvisualizados", "Avisos Visualizados"),
    ("participaçõesemdiscussões", "Participações em Discussões"),
    ("paisresponderampesquisa", "Pais Responderam Pesquisa"),
    ("satisfaçãodospais", "Satisfação dos Pais"),
    ("faltasescolares", "Faltas Escolares"),
];
