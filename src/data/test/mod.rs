mod pearl;
